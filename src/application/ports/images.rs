use crate::domain::content::ImageRef;

pub trait ImageUrlBuilder: Send + Sync {
    /// Public URL for the referenced asset, optionally scaled to `width` pixels.
    /// Returns `None` when the reference cannot be resolved.
    fn url(&self, image: &ImageRef, width: Option<u32>) -> Option<String>;
}
