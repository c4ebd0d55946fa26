//! In-memory link registry: creation, resolution and click statistics.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::entities::{Click, Link, LinkStats, NewLink};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;

/// Tunables for [`LinkRegistry`].
#[derive(Debug, Clone)]
pub struct RegistrySettings {
    /// Validity used when a create request omits it or sends zero.
    pub default_validity_minutes: i64,
    /// Upper bound on generated-code collisions before giving up.
    pub max_code_attempts: usize,
    /// Placeholder stored as the `geo` of every click.
    pub geo: String,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            default_validity_minutes: 30,
            max_code_attempts: 10,
            geo: "IN".to_string(),
        }
    }
}

impl From<&Config> for RegistrySettings {
    fn from(config: &Config) -> Self {
        Self {
            default_validity_minutes: config.default_validity_minutes,
            max_code_attempts: config.max_code_attempts,
            geo: config.click_geo.clone(),
        }
    }
}

/// A stored link plus its append-only click log.
#[derive(Debug)]
struct LinkEntry {
    link: Link,
    clicks: RwLock<Vec<Click>>,
}

impl LinkEntry {
    fn new(link: Link) -> Self {
        Self {
            link,
            clicks: RwLock::new(Vec::new()),
        }
    }
}

/// Concurrent store mapping short codes to links.
///
/// # Concurrency
///
/// The key set lives in a sharded [`DashMap`]; inserting a code goes through
/// the entry API, so the existence check and the insert happen under the same
/// shard lock and two creates can never both claim one code. Each entry owns an
/// `RwLock` around its click log: redirects on different codes never contend,
/// and appends to one code are serialised in lock-acquisition order.
///
/// Entries are never removed. Expired links stop redirecting but keep
/// answering stats until the process exits.
pub struct LinkRegistry {
    links: DashMap<String, Arc<LinkEntry>>,
    clock: Arc<dyn Clock>,
    settings: RegistrySettings,
    generate: fn() -> String,
}

impl LinkRegistry {
    /// Creates an empty registry backed by the system clock.
    pub fn new(settings: RegistrySettings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    /// Creates an empty registry that reads time from `clock`.
    pub fn with_clock(settings: RegistrySettings, clock: Arc<dyn Clock>) -> Self {
        Self {
            links: DashMap::new(),
            clock,
            settings,
            generate: generate_code,
        }
    }

    #[cfg(test)]
    fn with_generator(mut self, generate: fn() -> String) -> Self {
        self.generate = generate;
        self
    }

    /// Stores a new link and returns it.
    ///
    /// # Code Selection
    ///
    /// - A non-empty `custom_code` is used as-is or rejected if already stored
    /// - Otherwise a random 6-character alphanumeric code is generated, retrying
    ///   on collision up to `max_code_attempts` times
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidInput`] if the URL is empty or not an absolute
    ///   HTTP(S) URL, or the expiry overflows the timestamp range
    /// - [`AppError::ShortcodeTaken`] if the custom code already exists; the
    ///   stored link is left untouched
    /// - [`AppError::GenerationExhausted`] if every generated code collided
    pub fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        validate_url(&new_link.long_url).map_err(|e| {
            debug!(error = %e, "rejecting target URL");
            AppError::InvalidInput
        })?;

        let created_at = self.clock.now();
        let expires_at = self.expiry_for(created_at, new_link.validity_minutes)?;

        let link = match new_link.custom_code.filter(|code| !code.is_empty()) {
            Some(code) => self.insert(code, new_link.long_url, created_at, expires_at)?,
            None => self.insert_generated(new_link.long_url, created_at, expires_at)?,
        };

        debug!(code = %link.code, expires_at = %link.expires_at, "link created");
        Ok(link)
    }

    /// Returns the target URL of `code` and records a click against it.
    ///
    /// `referrer` may be empty.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the code is not stored
    /// - [`AppError::Expired`] if now is strictly after the link's expiry
    pub fn resolve(&self, code: &str, referrer: &str) -> Result<String, AppError> {
        let entry = self.entry(code)?;

        let now = self.clock.now();
        if entry.link.is_expired_at(now) {
            debug!(code, "link expired");
            return Err(AppError::Expired);
        }

        // Stamped under the lock so list order and click times agree.
        let mut clicks = entry.clicks.write();
        clicks.push(Click::new(self.clock.now(), referrer, &self.settings.geo));
        drop(clicks);

        debug!(code, "click recorded");
        Ok(entry.link.long_url.clone())
    }

    /// Returns a snapshot of the link and its clicks.
    ///
    /// Expired links are still reported.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is not stored.
    pub fn stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let entry = self.entry(code)?;
        let clicks = entry.clicks.read().clone();

        Ok(LinkStats {
            link: entry.link.clone(),
            clicks,
        })
    }

    /// Number of stored links, expired ones included.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    // The shard guard is released before the caller touches the click log.
    fn entry(&self, code: &str) -> Result<Arc<LinkEntry>, AppError> {
        self.links
            .get(code)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(AppError::NotFound)
    }

    fn expiry_for(
        &self,
        created_at: DateTime<Utc>,
        validity_minutes: Option<i64>,
    ) -> Result<DateTime<Utc>, AppError> {
        // Negative values are accepted and yield a link that is already expired.
        let minutes = match validity_minutes {
            None | Some(0) => self.settings.default_validity_minutes,
            Some(m) => m,
        };

        Duration::try_minutes(minutes)
            .and_then(|validity| created_at.checked_add_signed(validity))
            .ok_or(AppError::InvalidInput)
    }

    fn insert(
        &self,
        code: String,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Link, AppError> {
        match self.links.entry(code) {
            Entry::Occupied(occupied) => {
                debug!(code = %occupied.key(), "requested code already taken");
                Err(AppError::ShortcodeTaken)
            }
            Entry::Vacant(vacant) => {
                let link = Link::new(vacant.key().clone(), long_url, created_at, expires_at);
                vacant.insert(Arc::new(LinkEntry::new(link.clone())));
                Ok(link)
            }
        }
    }

    fn insert_generated(
        &self,
        long_url: String,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Link, AppError> {
        for attempt in 1..=self.settings.max_code_attempts {
            let code = (self.generate)();

            match self.insert(code, long_url.clone(), created_at, expires_at) {
                Err(AppError::ShortcodeTaken) => {
                    warn!(attempt, "generated code collision, retrying");
                }
                result => return result,
            }
        }

        Err(AppError::GenerationExhausted)
    }
}

impl Default for LinkRegistry {
    fn default() -> Self {
        Self::new(RegistrySettings::default())
    }
}
