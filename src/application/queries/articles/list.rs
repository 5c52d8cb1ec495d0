use super::ArticleQueryService;
use crate::application::{dto::ArticleSummaryDto, error::ApplicationResult};

impl ArticleQueryService {
    /// All articles for the listing grid, in store order. No filtering.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let records = self.read_repo.list_summaries().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
