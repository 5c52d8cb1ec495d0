use crate::application::{
    ApplicationResult,
    forms::CommentForm,
    ports::ImageUrlBuilderPort,
    queries::articles::{ArticleQueryService, GetArticleBySlugQuery},
    regeneration::{PageBuilder, RenderedPage},
};
use crate::presentation::views::render_article_page;
use async_trait::async_trait;
use std::sync::Arc;

/// Renders the cacheable article page: the body, approved comments and an
/// empty comment form.
pub struct ArticlePageBuilder {
    queries: Arc<ArticleQueryService>,
    images: Arc<ImageUrlBuilderPort>,
}

impl ArticlePageBuilder {
    pub fn new(queries: Arc<ArticleQueryService>, images: Arc<ImageUrlBuilderPort>) -> Self {
        Self { queries, images }
    }
}

#[async_trait]
impl PageBuilder for ArticlePageBuilder {
    async fn build(&self, slug: &str) -> ApplicationResult<Option<RenderedPage>> {
        let article = match self
            .queries
            .get_article_by_slug(GetArticleBySlugQuery {
                slug: slug.to_owned(),
            })
            .await
        {
            Ok(article) => article,
            Err(err) if err.is_not_found() => return Ok(None),
            Err(err) => return Err(err),
        };

        let form = CommentForm::new(article.id.clone());
        let markup = render_article_page(&article, &form, self.images.as_ref());
        Ok(Some(RenderedPage::new(markup.into_string())))
    }
}
