pub mod article;
pub mod comment;
pub mod content;
pub mod errors;
