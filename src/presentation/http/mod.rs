// src/presentation/http/mod.rs
pub mod caching;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod page_builder;
pub mod routes;
pub mod state;
