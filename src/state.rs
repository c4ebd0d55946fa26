//! Shared state handed to every request handler.

use std::sync::Arc;

use crate::application::services::LinkRegistry;

/// Application state cloned into each handler.
///
/// The registry is created once at startup; cloning the state only bumps the
/// reference count.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<LinkRegistry>,
    pub base_url: Arc<str>,
}

impl AppState {
    /// Creates the state. `base_url` is used verbatim as the short link prefix.
    pub fn new(registry: Arc<LinkRegistry>, base_url: impl Into<Arc<str>>) -> Self {
        Self {
            registry,
            base_url: base_url.into(),
        }
    }

    /// Builds the public short link for `code`.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}{}", self.base_url, code)
    }
}
