use crate::application::{ApplicationResult, dto::CommentSubmission};
use async_trait::async_trait;

/// Destination of a validated comment form.
#[async_trait]
pub trait CommentSubmitter: Send + Sync {
    async fn submit(&self, submission: CommentSubmission) -> ApplicationResult<()>;
}
