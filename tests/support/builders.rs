// tests/support/builders.rs
use super::mocks::fixed_now;
use mokkan_reader::domain::article::*;
use mokkan_reader::domain::comment::{Comment, CommentId};
use mokkan_reader::domain::content::{ContentBlock, ImageRef};

pub struct ArticleBuilder {
    id: String,
    title: String,
    slug: String,
    description: Option<String>,
    author: Option<Author>,
    main_image: Option<ImageRef>,
    body: Vec<ContentBlock>,
    comments: Vec<Comment>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: "post-1".into(),
            title: "Test Article".into(),
            slug: "test-article".into(),
            description: Some("A short description".into()),
            author: Some(Author {
                name: "Jane Doe".into(),
                image: None,
            }),
            main_image: None,
            body: vec![ContentBlock::paragraph("Test body")],
            comments: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(Author {
            name: name.into(),
            image: None,
        });
        self
    }

    pub fn main_image(mut self, asset_ref: impl Into<String>) -> Self {
        self.main_image = Some(ImageRef::new(asset_ref));
        self
    }

    pub fn body(mut self, body: Vec<ContentBlock>) -> Self {
        self.body = body;
        self
    }

    pub fn comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            slug: ArticleSlug::new(self.slug).unwrap(),
            description: self.description,
            author: self.author,
            main_image: self.main_image,
            created_at: fixed_now(),
            body: self.body,
            comments: self.comments,
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 記事 `post` に紐づくコメントを作る
pub fn comment(id: &str, post: &str, approved: bool) -> Comment {
    Comment {
        id: CommentId::new(id).unwrap(),
        post: ArticleId::new(post).unwrap(),
        name: format!("reader-{id}"),
        email: format!("{id}@example.com"),
        comment: format!("comment text from {id}"),
        approved,
    }
}
