//! Request-level errors and their HTTP representation.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Wire format of every error response: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced by the registry and the HTTP handlers.
///
/// The `Display` text of each variant is exactly the message clients receive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Unparsable body, missing or malformed URL, or unusable validity.
    #[error("Invalid request body or missing URL")]
    InvalidInput,

    /// The explicitly requested short code is already stored.
    #[error("Shortcode already exists")]
    ShortcodeTaken,

    #[error("Shortcode not found")]
    NotFound,

    /// The code exists but its validity window has passed.
    #[error("Short URL has expired")]
    Expired,

    #[error("Invalid path")]
    InvalidPath,

    /// Every generated candidate code collided with a stored one.
    #[error("Failed to generate unique shortcode")]
    GenerationExhausted,

    #[error("Internal server error")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput | AppError::ShortcodeTaken | AppError::InvalidPath => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Expired => StatusCode::GONE,
            AppError::GenerationExhausted | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
