//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use super::click::Click;

/// A shortened URL link with its validity window.
///
/// Every field is fixed at creation time. Clicks are tracked separately by the
/// registry so that a `Link` can be shared freely without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            long_url,
            created_at,
            expires_at,
        }
    }

    /// Returns true if the link is past its expiry at `now`.
    ///
    /// The expiry instant itself still counts as valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// Input data for creating a new link.
///
/// `custom_code` and `validity_minutes` are optional; an empty custom code is
/// treated the same as no code at all.
#[derive(Debug, Clone, Default)]
pub struct NewLink {
    pub long_url: String,
    pub custom_code: Option<String>,
    pub validity_minutes: Option<i64>,
}

impl NewLink {
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            ..Default::default()
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }

    pub fn with_validity(mut self, minutes: i64) -> Self {
        self.validity_minutes = Some(minutes);
        self
    }
}

/// Point-in-time view of a link and every click recorded against it.
///
/// The click list is an owned copy; later redirects do not show up in an
/// already returned snapshot.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub clicks: Vec<Click>,
}

impl LinkStats {
    pub fn total_clicks(&self) -> usize {
        self.clicks.len()
    }
}
