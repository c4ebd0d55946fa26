//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use tracing::debug;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::timestamp::format_rfc3339;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "validity": 30,        // optional, minutes
///   "shortcode": "abc123"  // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortLink": "http://localhost:8080/abc123",
///   "expiry": "2024-01-01T00:30:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is not valid JSON, the URL is missing or invalid, or the
///   requested shortcode already exists
/// - 500 if no unique code could be generated
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let request: ShortenRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(error = %e, "unparsable shorten request");
        AppError::InvalidInput
    })?;

    let link = state.registry.create(request.into())?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_link: state.short_link(&link.code),
            expiry: format_rfc3339(&link.expires_at),
        }),
    ))
}
