//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves click statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// The route captures the whole remainder of the path, so extra segments
/// such as `/shorturls/abc/extra` reach this handler and are rejected here.
///
/// # Response
///
/// ```json
/// {
///   "totalClicks": 1,
///   "originalURL": "https://example.com",
///   "createdAt": "2024-01-01T00:00:00Z",
///   "expiry": "2024-01-01T00:30:00Z",
///   "clicks": [
///     { "time": "2024-01-01T00:05:00.123Z", "referrer": "", "geo": "IN" }
///   ]
/// }
/// ```
///
/// Expired links still report their statistics.
///
/// # Errors
///
/// Returns 400 Bad Request if the path has more than one segment after `/shorturls/`.
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    if path.contains('/') {
        return Err(AppError::InvalidPath);
    }

    let stats = state.registry.stats(&path)?;

    Ok(Json(StatsResponse::from(stats)))
}
