// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::comments::CommentCommandService, ports::submission::CommentSubmitter,
        queries::articles::ArticleQueryService,
    },
    domain::{article::ArticleReadRepository, comment::CommentWriteRepository},
};

pub struct ApplicationServices {
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        comment_write_repo: Arc<dyn CommentWriteRepository>,
    ) -> Self {
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let comment_commands = Arc::new(CommentCommandService::new(Arc::clone(
            &comment_write_repo,
        )));

        Self {
            article_queries,
            comment_commands,
        }
    }

    /// Submitter used by server-side comment forms.
    pub fn comment_submitter(&self) -> Arc<dyn CommentSubmitter> {
        Arc::clone(&self.comment_commands) as Arc<dyn CommentSubmitter>
    }
}
