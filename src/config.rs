//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! `main` loads a `.env` file first (via `dotenvy`) and lets `--listen` /
//! `--base-url` command-line flags override the environment.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Prefix of every returned short link (default: `http://localhost:8080/`)
//! - `DEFAULT_VALIDITY_MINUTES` - Validity when a request omits it (default: 30)
//! - `MAX_CODE_ATTEMPTS` - Generated-code collisions tolerated per create (default: 10)
//! - `CLICK_GEO` - Placeholder stored as the geo of every click (default: `IN`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Always ends with `/`; the short code is appended directly.
    pub base_url: String,
    pub default_validity_minutes: i64,
    pub max_code_attempts: usize,
    pub click_geo: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            default_validity_minutes: 30,
            max_code_attempts: 10,
            click_geo: "IN".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL")
            .map(normalize_base_url)
            .unwrap_or(defaults.base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let click_geo = env::var("CLICK_GEO").unwrap_or(defaults.click_geo);

        let default_validity_minutes = parse_var("DEFAULT_VALIDITY_MINUTES")?
            .unwrap_or(defaults.default_validity_minutes);

        let max_code_attempts =
            parse_var("MAX_CODE_ATTEMPTS")?.unwrap_or(defaults.max_code_attempts);

        Ok(Self {
            listen_addr,
            base_url,
            default_validity_minutes,
            max_code_attempts,
            click_geo,
            log_level,
            log_format,
        })
    }

    /// Applies command-line overrides on top of the environment.
    pub fn with_overrides(mut self, listen_addr: Option<String>, base_url: Option<String>) -> Self {
        if let Some(listen_addr) = listen_addr {
            self.listen_addr = listen_addr;
        }
        if let Some(base_url) = base_url {
            self.base_url = normalize_base_url(base_url);
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `base_url` is not an HTTP(S) URL
    /// - `default_validity_minutes` is less than 1
    /// - `max_code_attempts` is outside 1..=1000
    /// - `click_geo` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.default_validity_minutes < 1 {
            anyhow::bail!(
                "DEFAULT_VALIDITY_MINUTES must be at least 1, got {}",
                self.default_validity_minutes
            );
        }

        if self.max_code_attempts == 0 || self.max_code_attempts > 1000 {
            anyhow::bail!(
                "MAX_CODE_ATTEMPTS must be between 1 and 1000, got {}",
                self.max_code_attempts
            );
        }

        if self.click_geo.is_empty() {
            anyhow::bail!("CLICK_GEO must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Default validity: {} min", self.default_validity_minutes);
        tracing::info!("  Max code attempts: {}", self.max_code_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Ensures the base URL ends with exactly one `/`.
fn normalize_base_url(base_url: String) -> String {
    if base_url.ends_with('/') {
        base_url
    } else {
        format!("{base_url}/")
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
