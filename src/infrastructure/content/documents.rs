//! Wire documents returned by the content queries, and their conversion
//! into domain types. Projections use store field names (`_id`,
//! `mainImage`, `slug.current`); any projected field may come back `null`.

use super::portable_text;
use crate::domain::{
    article::{Article, ArticleId, ArticleRef, ArticleSlug, ArticleSummary, ArticleTitle, Author},
    comment::{Comment, CommentId, NewComment},
    content::ImageRef,
    errors::DomainError,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct SlugField {
    pub current: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub reference: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImageField {
    pub asset: Option<Reference>,
    pub alt: Option<String>,
}

impl ImageField {
    pub fn into_image_ref(self) -> Option<ImageRef> {
        let asset_ref = self.asset?.reference?;
        Some(ImageRef {
            asset_ref,
            alt: self.alt,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct AuthorDocument {
    pub name: Option<String>,
    pub image: Option<ImageField>,
}

impl AuthorDocument {
    fn into_author(self) -> Option<Author> {
        Some(Author {
            name: self.name?,
            image: self.image.and_then(ImageField::into_image_ref),
        })
    }
}

fn required_slug(slug: Option<SlugField>) -> Result<ArticleSlug, DomainError> {
    let current = slug
        .and_then(|slug| slug.current)
        .ok_or_else(|| DomainError::Validation("slug cannot be empty".into()))?;
    ArticleSlug::new(current)
}

/// Listing projection: `{_id, title, slug, author->{name, image}, description, mainImage}`.
#[derive(Debug, Deserialize)]
pub struct PostSummaryDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<SlugField>,
    pub author: Option<AuthorDocument>,
    pub description: Option<String>,
    #[serde(rename = "mainImage")]
    pub main_image: Option<ImageField>,
}

impl TryFrom<PostSummaryDocument> for ArticleSummary {
    type Error = DomainError;

    fn try_from(doc: PostSummaryDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(doc.id)?,
            title: ArticleTitle::new(doc.title.unwrap_or_default())?,
            slug: required_slug(doc.slug)?,
            description: doc.description,
            author: doc.author.and_then(AuthorDocument::into_author),
            main_image: doc.main_image.and_then(ImageField::into_image_ref),
        })
    }
}

/// Slug enumeration projection: `{_id, slug}`.
#[derive(Debug, Deserialize)]
pub struct PostRefDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub slug: Option<SlugField>,
}

impl TryFrom<PostRefDocument> for ArticleRef {
    type Error = DomainError;

    fn try_from(doc: PostRefDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ArticleId::new(doc.id)?,
            slug: required_slug(doc.slug)?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub post: Option<Reference>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub comment: Option<String>,
    pub approved: Option<bool>,
}

impl TryFrom<CommentDocument> for Comment {
    type Error = DomainError;

    fn try_from(doc: CommentDocument) -> Result<Self, Self::Error> {
        let post = doc
            .post
            .and_then(|post| post.reference)
            .ok_or_else(|| DomainError::Validation("comment has no post reference".into()))?;
        Ok(Self {
            id: CommentId::new(doc.id)?,
            post: ArticleId::new(post)?,
            name: doc.name.unwrap_or_default(),
            email: doc.email.unwrap_or_default(),
            comment: doc.comment.unwrap_or_default(),
            approved: doc.approved.unwrap_or(false),
        })
    }
}

/// Detail projection, including the approved comments sub-query.
#[derive(Debug, Deserialize)]
pub struct PostDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: DateTime<Utc>,
    pub title: Option<String>,
    pub author: Option<AuthorDocument>,
    pub description: Option<String>,
    pub slug: Option<SlugField>,
    #[serde(rename = "mainImage")]
    pub main_image: Option<ImageField>,
    pub body: Option<Vec<Value>>,
    pub comments: Option<Vec<CommentDocument>>,
}

impl TryFrom<PostDocument> for Article {
    type Error = DomainError;

    fn try_from(doc: PostDocument) -> Result<Self, Self::Error> {
        let comments = doc
            .comments
            .unwrap_or_default()
            .into_iter()
            .filter_map(|comment| match Comment::try_from(comment) {
                Ok(comment) => Some(comment),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping malformed comment");
                    None
                }
            })
            .collect();

        Ok(Self {
            id: ArticleId::new(doc.id)?,
            title: ArticleTitle::new(doc.title.unwrap_or_default())?,
            slug: required_slug(doc.slug)?,
            description: doc.description,
            author: doc.author.and_then(AuthorDocument::into_author),
            main_image: doc.main_image.and_then(ImageField::into_image_ref),
            created_at: doc.created_at,
            body: portable_text::decode_blocks(doc.body.unwrap_or_default()),
            comments,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ReferenceOut {
    #[serde(rename = "_type")]
    pub kind: &'static str,
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// Document sent to the store for a new comment. Always unapproved.
#[derive(Debug, Serialize)]
pub struct NewCommentDocument {
    #[serde(rename = "_type")]
    pub kind: &'static str,
    pub post: ReferenceOut,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub approved: bool,
}

impl From<NewComment> for NewCommentDocument {
    fn from(comment: NewComment) -> Self {
        Self {
            kind: "comment",
            post: ReferenceOut {
                kind: "reference",
                reference: comment.post.into_inner(),
            },
            name: comment.name.into_inner(),
            email: comment.email.into_inner(),
            comment: comment.comment.into_inner(),
            approved: false,
        }
    }
}
