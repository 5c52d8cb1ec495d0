// tests/support/mocks/submitter.rs
use async_trait::async_trait;
use mokkan_reader::application::{
    ApplicationResult, dto::CommentSubmission, error::ApplicationError,
    ports::submission::CommentSubmitter,
};
use std::sync::Mutex;

/// 送信内容を記録する CommentSubmitter
#[derive(Default)]
pub struct RecordingSubmitter {
    calls: Mutex<Vec<CommentSubmission>>,
    fail: bool,
}

impl RecordingSubmitter {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<CommentSubmission> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentSubmitter for RecordingSubmitter {
    async fn submit(&self, submission: CommentSubmission) -> ApplicationResult<()> {
        self.calls.lock().unwrap().push(submission);
        if self.fail {
            return Err(ApplicationError::infrastructure("write failed"));
        }
        Ok(())
    }
}
