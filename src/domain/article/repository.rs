use crate::domain::article::entity::{Article, ArticleRef, ArticleSummary};
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    /// Every article projected for the listing grid, in store order.
    async fn list_summaries(&self) -> DomainResult<Vec<ArticleSummary>>;
    /// Identifier and slug of every known article.
    async fn list_refs(&self) -> DomainResult<Vec<ArticleRef>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
}
