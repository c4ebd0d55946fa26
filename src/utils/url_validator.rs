//! Target URL validation.
//!
//! Submitted URLs are checked but stored verbatim: the redirect must lead to
//! exactly the string the client sent.

use std::borrow::Cow;

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL contains control characters")]
    ControlCharacters,
}

/// Checks that `input` is an absolute HTTP or HTTPS URL.
///
/// # Rules
///
/// 1. Must be non-empty
/// 2. Must parse as an absolute URL
/// 3. Scheme must be `http` or `https`
/// 4. Must not contain control characters (it ends up in a `Location` header)
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule that fails.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_url("https://example.com").is_ok());
/// assert!(validate_url("example.com").is_err());
/// assert!(validate_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::ControlCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

/// Returns a form of `target` that is safe to put in a `Location` header.
///
/// ASCII URLs are returned unchanged. Anything else is re-serialized by the
/// URL parser (punycode host, percent-encoded path).
pub fn redirect_location(target: &str) -> Cow<'_, str> {
    if target.is_ascii() {
        return Cow::Borrowed(target);
    }

    match Url::parse(target) {
        Ok(url) => Cow::Owned(url.to_string()),
        Err(_) => Cow::Borrowed(target),
    }
}
