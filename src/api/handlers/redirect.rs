//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_validator::redirect_location;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// Every successful redirect appends a click with the request's `Referer`
/// header (empty if absent) before the response is sent. Header bytes that
/// are not valid UTF-8 are replaced rather than dropped.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let referrer = headers
        .get(header::REFERER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()))
        .unwrap_or_default();

    let long_url = state.registry.resolve(&code, &referrer)?;

    let location = HeaderValue::from_str(&redirect_location(&long_url)).map_err(|e| {
        error!(code = %code, error = %e, "stored URL is not a valid Location header");
        AppError::Internal
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
