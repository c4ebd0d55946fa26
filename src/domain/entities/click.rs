//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click recorded when a shortened link is followed.
///
/// `referrer` is empty when the request carried no `Referer` header. `geo` is
/// a fixed placeholder taken from configuration, not derived from the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub referrer: String,
    pub geo: String,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(clicked_at: DateTime<Utc>, referrer: &str, geo: &str) -> Self {
        Self {
            clicked_at,
            referrer: referrer.to_string(),
            geo: geo.to_string(),
        }
    }
}
