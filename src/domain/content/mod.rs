pub mod block;
pub mod image;

pub use block::{ContentBlock, HeadingLevel, ListKind, Mark, Span};
pub use image::ImageRef;
