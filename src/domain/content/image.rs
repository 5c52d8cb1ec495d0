/// Reference to an image asset held by the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub asset_ref: String,
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn new(asset_ref: impl Into<String>) -> Self {
        Self {
            asset_ref: asset_ref.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}
