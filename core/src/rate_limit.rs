//! Rate-limit information attached to every parsed response.

use chrono::{DateTime, Utc};

use crate::http::HttpResponse;

pub const LIMIT_HEADER: &str = "x-rate-limit-limit";
pub const REMAINING_HEADER: &str = "x-rate-limit-remaining";
pub const RESET_HEADER: &str = "x-rate-limit-reset";

/// Request budget for the current rate-limit window.
///
/// Missing or unparsable headers degrade to `-1` for the counters and the
/// Unix epoch for the reset time. Extraction never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: i64,
    pub remaining: i64,
    pub reset_at: DateTime<Utc>,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            limit: -1,
            remaining: -1,
            reset_at: DateTime::<Utc>::default(),
        }
    }
}

impl RateLimit {
    pub fn from_response(response: &HttpResponse) -> Self {
        let limit = header_i64(response, LIMIT_HEADER).unwrap_or(-1);
        let remaining = header_i64(response, REMAINING_HEADER).unwrap_or(-1);
        let reset_at = header_i64(response, RESET_HEADER)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_default();

        tracing::debug!(limit, remaining, %reset_at, "rate limit extracted");
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// `true` when the headers were present and the window is used up.
    pub fn is_exhausted(&self) -> bool {
        self.limit >= 0 && self.remaining == 0
    }
}

fn header_i64(response: &HttpResponse, name: &str) -> Option<i64> {
    response.header(name)?.trim().parse().ok()
}
