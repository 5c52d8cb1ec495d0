// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleTitle};
use crate::domain::comment::Comment;
use crate::domain::content::{ContentBlock, ImageRef};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub image: Option<ImageRef>,
}

/// Listing projection of an article.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub description: Option<String>,
    pub author: Option<Author>,
    pub main_image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRef {
    pub id: ArticleId,
    pub slug: ArticleSlug,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub description: Option<String>,
    pub author: Option<Author>,
    pub main_image: Option<ImageRef>,
    pub created_at: DateTime<Utc>,
    pub body: Vec<ContentBlock>,
    pub comments: Vec<Comment>,
}

impl Article {
    /// Drop every comment that is not approved or not attached to this article.
    pub fn retain_visible_comments(&mut self) {
        let id = self.id.clone();
        self.comments.retain(|comment| comment.is_visible_on(&id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comment::CommentId;
    use chrono::Utc;

    fn comment(id: &str, post: &str, approved: bool) -> Comment {
        Comment {
            id: CommentId::new(id).unwrap(),
            post: ArticleId::new(post).unwrap(),
            name: "reader".into(),
            email: "reader@example.com".into(),
            comment: "a perfectly reasonable comment".into(),
            approved,
        }
    }

    fn sample_article(comments: Vec<Comment>) -> Article {
        Article {
            id: ArticleId::new("post-1").unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            slug: ArticleSlug::new("title").unwrap(),
            description: None,
            author: None,
            main_image: None,
            created_at: Utc::now(),
            body: Vec::new(),
            comments,
        }
    }

    #[test]
    fn retain_visible_comments_keeps_only_approved_for_this_article() {
        let mut article = sample_article(vec![
            comment("c1", "post-1", true),
            comment("c2", "post-1", false),
            comment("c3", "post-2", true),
        ]);

        article.retain_visible_comments();

        let ids: Vec<_> = article.comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1"]);
    }

    #[test]
    fn retain_visible_comments_preserves_order() {
        let mut article = sample_article(vec![
            comment("b", "post-1", true),
            comment("a", "post-1", true),
        ]);

        article.retain_visible_comments();

        let ids: Vec<_> = article.comments.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}
