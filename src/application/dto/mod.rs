pub mod articles;
pub mod comments;

pub use articles::{ArticleDetailDto, ArticleSummaryDto, AuthorDto, CommentDto};
pub use comments::CommentSubmission;
