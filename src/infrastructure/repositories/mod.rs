// src/infrastructure/repositories/mod.rs
mod article;
mod comment;
mod error;

pub use article::ContentArticleRepository;
pub use comment::ContentCommentRepository;
pub(crate) use error::map_client_error;
