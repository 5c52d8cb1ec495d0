// src/infrastructure/repositories/article.rs
use super::map_client_error;
use crate::application::ports::content::{ContentClient, QueryParams};
use crate::domain::article::{
    Article, ArticleReadRepository, ArticleRef, ArticleSlug, ArticleSummary,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::content::documents::{
    PostDocument, PostRefDocument, PostSummaryDocument,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

pub const LIST_QUERY: &str = r#"*[_type == "post"]{
  _id,
  title,
  slug,
  author->{name, image},
  description,
  mainImage
}"#;

pub const SLUGS_QUERY: &str = r#"*[_type == "post"]{
  _id,
  slug{current}
}"#;

pub const DETAIL_QUERY: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  _id,
  _createdAt,
  title,
  author->{name, image},
  'comments': *[_type == "comment" && post._ref == ^._id && approved == true],
  description,
  mainImage,
  slug,
  body
}"#;

#[derive(Clone)]
pub struct ContentArticleRepository {
    client: Arc<dyn ContentClient>,
}

impl ContentArticleRepository {
    pub fn new(client: Arc<dyn ContentClient>) -> Self {
        Self { client }
    }

    async fn fetch_list<D, T>(&self, query: &str, what: &'static str) -> DomainResult<Vec<T>>
    where
        D: DeserializeOwned,
        T: TryFrom<D, Error = DomainError>,
    {
        let value = self
            .client
            .fetch(query, &QueryParams::new())
            .await
            .map_err(map_client_error)?;

        let records: Vec<Value> = match value {
            Value::Null => return Ok(Vec::new()),
            Value::Array(records) => records,
            other => {
                return Err(DomainError::Persistence(format!(
                    "expected a list of {what}, got {}",
                    json_kind(&other)
                )));
            }
        };

        Ok(records
            .into_iter()
            .filter_map(|record| match decode::<D, T>(record) {
                Ok(item) => Some(item),
                Err(err) => {
                    tracing::warn!(error = %err, record = what, "skipping invalid record");
                    None
                }
            })
            .collect())
    }
}

fn decode<D, T>(record: Value) -> DomainResult<T>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = DomainError>,
{
    let doc: D = serde_json::from_value(record)
        .map_err(|err| DomainError::Validation(format!("malformed document: {err}")))?;
    T::try_from(doc)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl ArticleReadRepository for ContentArticleRepository {
    async fn list_summaries(&self) -> DomainResult<Vec<ArticleSummary>> {
        self.fetch_list::<PostSummaryDocument, ArticleSummary>(LIST_QUERY, "post summary")
            .await
    }

    async fn list_refs(&self) -> DomainResult<Vec<ArticleRef>> {
        self.fetch_list::<PostRefDocument, ArticleRef>(SLUGS_QUERY, "post slug")
            .await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let mut params = QueryParams::new();
        params.insert("slug".into(), Value::String(slug.as_str().to_owned()));

        let value = self
            .client
            .fetch(DETAIL_QUERY, &params)
            .await
            .map_err(map_client_error)?;
        if value.is_null() {
            return Ok(None);
        }

        let article = decode::<PostDocument, Article>(value).map_err(|err| {
            DomainError::Persistence(format!("article '{slug}' could not be decoded: {err}"))
        })?;
        Ok(Some(article))
    }
}
