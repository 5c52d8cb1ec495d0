//! HTML rendering with maud. All interpolated text is escaped by the macro.
//!
//! Views are pure: they take DTOs (and an image URL builder) and return
//! [`maud::Markup`]. Caching, status codes and headers belong to the HTTP
//! controllers.

pub mod article;
pub mod comment_form;
pub mod errors;
pub mod layout;
pub mod listing;
pub mod portable_text;

pub use article::{article_serializers, render_article_page};
pub use errors::{render_error_page, render_not_found_page};
pub use listing::render_index_page;
pub use portable_text::{NodeKind, NodeProps, NodeRenderer, PortableTextRenderer, Serializers};
