// tests/support/mocks/comment_repos.rs
use async_trait::async_trait;
use mokkan_reader::domain::comment::{CommentWriteRepository, NewComment};
use mokkan_reader::domain::errors::{DomainError, DomainResult};
use std::sync::Mutex;

/// 書き込まれたコメントを記録するリポジトリ
#[derive(Default)]
pub struct RecordingCommentRepo {
    created: Mutex<Vec<NewComment>>,
    fail: bool,
}

impl RecordingCommentRepo {
    /// すべての書き込みに失敗するリポジトリ
    pub fn failing() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn created(&self) -> Vec<NewComment> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentWriteRepository for RecordingCommentRepo {
    async fn create(&self, comment: NewComment) -> DomainResult<()> {
        if self.fail {
            return Err(DomainError::Persistence("write rejected".into()));
        }
        self.created.lock().unwrap().push(comment);
        Ok(())
    }
}
