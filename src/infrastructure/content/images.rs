use crate::{application::ports::images::ImageUrlBuilder, domain::content::ImageRef};

const CDN_BASE: &str = "https://cdn.sanity.io/images";

/// Builds CDN URLs from `image-<id>-<w>x<h>-<format>` asset references.
#[derive(Debug, Clone)]
pub struct SanityImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl SanityImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }
}

impl ImageUrlBuilder for SanityImageUrlBuilder {
    fn url(&self, image: &ImageRef, width: Option<u32>) -> Option<String> {
        let asset_ref = image.asset_ref.trim();
        let base = if asset_ref.starts_with("https://") || asset_ref.starts_with("http://") {
            asset_ref.to_owned()
        } else {
            let file_name = file_name(asset_ref)?;
            format!("{CDN_BASE}/{}/{}/{file_name}", self.project_id, self.dataset)
        };

        Some(match width {
            Some(width) if base.contains('?') => format!("{base}&w={width}"),
            Some(width) => format!("{base}?w={width}"),
            None => base,
        })
    }
}

/// `image-abc-100x50-png` → `abc-100x50.png`.
fn file_name(asset_ref: &str) -> Option<String> {
    let rest = asset_ref.strip_prefix("image-")?;
    let (id_and_size, format) = rest.rsplit_once('-')?;
    let (id, size) = id_and_size.rsplit_once('-')?;
    let (w, h) = size.split_once('x')?;

    let dimensions_valid = [w, h]
        .iter()
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
    if id.is_empty() || format.is_empty() || !dimensions_valid {
        return None;
    }
    Some(format!("{id}-{w}x{h}.{format}"))
}
