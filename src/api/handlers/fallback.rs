//! Handlers for requests no endpoint accepts.

use axum::http::StatusCode;

use crate::error::AppError;

/// Answers unmatched paths (such as `/` or `/a/b`) as unknown short codes.
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}

/// Answers a known path requested with an unsupported method.
///
/// Attached explicitly so the router-wide 404 fallback never replaces it.
pub async fn method_not_allowed_handler() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}
