pub mod rate_limit;

pub use rate_limit::comment_rate_limit_layer;
