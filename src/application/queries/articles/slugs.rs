use super::ArticleQueryService;
use crate::application::error::ApplicationResult;

impl ArticleQueryService {
    /// Slugs of every known article, used to pre-render detail pages.
    pub async fn list_slugs(&self) -> ApplicationResult<Vec<String>> {
        let refs = self.read_repo.list_refs().await?;
        Ok(refs
            .into_iter()
            .map(|article| article.slug.into_inner())
            .collect())
    }
}
