// GitHub API response metadata.
// Rate limit state parsed from response headers.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

/// Rate limit information from response headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    /// Unix timestamp (seconds) at which the window resets.
    pub reset: u64,
}

impl RateLimit {
    /// Update from `x-ratelimit-*` headers, keeping fields whose header is
    /// absent or malformed.
    pub fn update_from_headers(&mut self, headers: &HeaderMap) {
        let parse = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
        };

        if let Some(limit) = parse("x-ratelimit-limit") {
            self.limit = limit;
        }
        if let Some(remaining) = parse("x-ratelimit-remaining") {
            self.remaining = remaining;
        }
        if let Some(reset) = parse("x-ratelimit-reset") {
            self.reset = reset;
        }
    }

    /// When the current window resets, if a reset time was reported.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        if self.reset == 0 {
            return None;
        }
        DateTime::from_timestamp(i64::try_from(self.reset).ok()?, 0)
    }

    /// Whether the last response reported no remaining requests.
    pub fn is_exhausted(&self) -> bool {
        self.limit > 0 && self.remaining == 0
    }
}
