// src/infrastructure/repositories/comment.rs
use super::map_client_error;
use crate::application::ports::content::ContentClient;
use crate::domain::comment::{CommentWriteRepository, NewComment};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::content::documents::NewCommentDocument;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContentCommentRepository {
    client: Arc<dyn ContentClient>,
}

impl ContentCommentRepository {
    pub fn new(client: Arc<dyn ContentClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentWriteRepository for ContentCommentRepository {
    async fn create(&self, comment: NewComment) -> DomainResult<()> {
        let document = serde_json::to_value(NewCommentDocument::from(comment))
            .map_err(|err| DomainError::Persistence(err.to_string()))?;
        self.client.create(document).await.map_err(map_client_error)
    }
}
