use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Named bindings for a parameterised query (`$slug` and friends).
pub type QueryParams = BTreeMap<String, Value>;

#[derive(Debug, Error)]
pub enum ContentClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("content API responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response payload: {0}")]
    Decode(String),
    #[error("write access requires an API token")]
    MissingToken,
}

/// Remote query/mutation adapter for the headless content store.
///
/// Authentication, CDN selection and transport concerns belong to the
/// implementation; callers only see query strings and JSON documents.
#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Run `query` with `params` bound and return the `result` payload.
    async fn fetch(&self, query: &str, params: &QueryParams) -> Result<Value, ContentClientError>;

    /// Create a single document.
    async fn create(&self, document: Value) -> Result<(), ContentClientError>;
}
