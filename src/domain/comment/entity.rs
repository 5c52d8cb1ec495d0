// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::comment::value_objects::{
    CommentId, CommentText, CommenterEmail, CommenterName,
};

/// A comment as read back from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub post: ArticleId,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub approved: bool,
}

impl Comment {
    pub fn is_visible_on(&self, article: &ArticleId) -> bool {
        self.approved && &self.post == article
    }
}

/// A validated submission; always stored unapproved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub post: ArticleId,
    pub name: CommenterName,
    pub email: CommenterEmail,
    pub comment: CommentText,
}
