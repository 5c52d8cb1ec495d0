use crate::domain::article::{Article, ArticleSummary, Author};
use crate::domain::comment::Comment;
use crate::domain::content::{ContentBlock, ImageRef};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDto {
    pub name: String,
    pub image: Option<ImageRef>,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            name: author.name,
            image: author.image,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleSummaryDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub author: Option<AuthorDto>,
    pub main_image: Option<ImageRef>,
}

impl ArticleSummaryDto {
    pub fn href(&self) -> String {
        format!("/post/{}", self.slug)
    }
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            id: summary.id.into_inner(),
            title: summary.title.into_inner(),
            slug: summary.slug.into_inner(),
            description: summary.description,
            author: summary.author.map(Into::into),
            main_image: summary.main_image,
        }
    }
}

/// Public view of an approved comment. The commenter's email is never exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDto {
    pub id: String,
    pub name: String,
    pub comment: String,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            name: comment.name,
            comment: comment.comment,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleDetailDto {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub author: Option<AuthorDto>,
    pub main_image: Option<ImageRef>,
    pub created_at: DateTime<Utc>,
    pub body: Vec<ContentBlock>,
    pub comments: Vec<CommentDto>,
}

impl From<Article> for ArticleDetailDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            description: article.description,
            author: article.author.map(Into::into),
            main_image: article.main_image,
            created_at: article.created_at,
            body: article.body,
            comments: article.comments.into_iter().map(Into::into).collect(),
        }
    }
}
