// src/presentation/http/state.rs
use crate::application::{
    ports::ImageUrlBuilderPort, regeneration::StaticPageCache, services::ApplicationServices,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub pages: Arc<StaticPageCache>,
    pub images: Arc<ImageUrlBuilderPort>,
    /// Origins allowed to call the JSON API from a browser.
    pub allowed_origins: Arc<[String]>,
}
