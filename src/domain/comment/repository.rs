use crate::domain::comment::entity::NewComment;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    /// Append an unapproved comment to the store. No idempotency key is sent.
    async fn create(&self, comment: NewComment) -> DomainResult<()>;
}
