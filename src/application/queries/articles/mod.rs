mod get_by_slug;
mod list;
mod service;
mod slugs;

pub use get_by_slug::GetArticleBySlugQuery;
pub use service::ArticleQueryService;
