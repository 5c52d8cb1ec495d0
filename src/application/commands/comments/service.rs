// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::domain::comment::CommentWriteRepository;

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
}

impl CommentCommandService {
    pub fn new(write_repo: Arc<dyn CommentWriteRepository>) -> Self {
        Self { write_repo }
    }
}
