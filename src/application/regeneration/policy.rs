use chrono::{DateTime, Utc};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegenerationPolicy {
    window: Duration,
}

impl RegenerationPolicy {
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(3600);

    pub const fn new(window: Duration) -> Self {
        Self { window }
    }

    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Whether a page computed at `computed_at` may be rebuilt at `now`.
    /// A timestamp in the future (clock skew) is never stale.
    pub fn is_stale(&self, computed_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(computed_at)
            .to_std()
            .is_ok_and(|elapsed| elapsed >= self.window)
    }
}

impl Default for RegenerationPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}
