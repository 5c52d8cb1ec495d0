// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Seconds between replenished comment submissions per client.
const REPLENISH_SECS: u64 = 6;
/// Submissions a client may make back to back before being throttled.
const BURST: u32 = 5;

pub type CommentRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per client IP limit shared by every comment endpoint it is applied to.
/// Clones share the same quota state.
pub fn comment_rate_limit_layer() -> CommentRateLimitLayer {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(REPLENISH_SECS);
    builder.burst_size(BURST);
    let config = builder
        .key_extractor(SmartIpKeyExtractor)
        .finish()
        .expect("rate limit quota constants are non-zero");

    GovernorLayer::new(config)
}
