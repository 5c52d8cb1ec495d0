pub mod content;
pub mod repositories;
pub mod time;
