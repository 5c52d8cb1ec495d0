//! Server-rendered blog front end over a headless content store.
//!
//! Layers follow a ports-and-adapters split:
//!
//! - [`domain`]: articles, comments and structured content blocks.
//! - [`application`]: queries, the comment command, the comment form state
//!   machine and the static page regeneration cache, plus the ports they use.
//! - [`infrastructure`]: the content store HTTP adapter and repositories.
//! - [`presentation`]: axum routes, controllers and maud views.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
