//! Timestamp formatting for API responses.

use chrono::{DateTime, SecondsFormat, Utc};

/// Formats an instant as RFC 3339 with second precision, e.g. `2024-01-02T03:04:05Z`.
pub fn format_rfc3339(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}
