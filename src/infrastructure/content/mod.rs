//! Adapter for a Sanity-compatible content lake: HTTP transport, wire
//! documents, Portable Text decoding and image CDN URLs.

mod client;
pub mod documents;
mod images;
pub mod portable_text;

pub use client::{SanityConfig, SanityHttpClient};
pub use images::SanityImageUrlBuilder;
