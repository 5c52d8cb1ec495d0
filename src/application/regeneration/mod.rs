//! Static regeneration of detail pages.
//!
//! Rendered pages are cached per slug together with the time they were
//! computed. Fresh entries are served as they are. The first request that sees
//! a stale entry schedules one background rebuild and is still answered with
//! the stale page; the rebuild replaces the entry when it finishes.

mod cache;
mod policy;

pub use cache::{CacheEntry, PageBuilder, PageSource, RenderedPage, ServedPage, StaticPageCache};
pub use policy::RegenerationPolicy;
