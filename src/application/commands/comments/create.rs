// src/application/commands/comments/create.rs
use super::CommentCommandService;
use crate::{
    application::{
        dto::CommentSubmission, error::ApplicationResult, ports::submission::CommentSubmitter,
    },
    domain::{
        article::ArticleId,
        comment::{CommentText, CommenterEmail, CommenterName, NewComment},
    },
};
use async_trait::async_trait;

pub struct CreateCommentCommand {
    pub article_id: String,
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl From<CommentSubmission> for CreateCommentCommand {
    fn from(submission: CommentSubmission) -> Self {
        Self {
            article_id: submission.article_id,
            name: submission.name,
            email: submission.email,
            comment: submission.comment,
        }
    }
}

impl CommentCommandService {
    /// Store a new, unapproved comment. Duplicate submissions are stored twice.
    pub async fn create_comment(&self, command: CreateCommentCommand) -> ApplicationResult<()> {
        let new_comment = NewComment {
            post: ArticleId::new(command.article_id)?,
            name: CommenterName::new(command.name)?,
            email: CommenterEmail::new(command.email)?,
            comment: CommentText::new(command.comment)?,
        };

        let article_id = new_comment.post.clone();
        self.write_repo.create(new_comment).await?;
        tracing::info!(article_id = %article_id, "comment stored for moderation");
        Ok(())
    }
}

#[async_trait]
impl CommentSubmitter for CommentCommandService {
    async fn submit(&self, submission: CommentSubmission) -> ApplicationResult<()> {
        self.create_comment(submission.into()).await
    }
}
