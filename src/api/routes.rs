//! API route configuration.

use crate::api::handlers::{
    method_not_allowed_handler, not_found_handler, redirect_handler, shorten_handler,
    stats_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorturls`          - Create a short link (other methods get 405)
/// - `GET  /shorturls/{code}`   - Click statistics for a link
/// - `GET  /{code}`             - Redirect to the original URL
///
/// Anything else falls through to a JSON 404.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorturls",
            post(shorten_handler).fallback(method_not_allowed_handler),
        )
        .route("/shorturls/{*path}", get(stats_handler))
        .route("/{code}", get(redirect_handler))
        .fallback(not_found_handler)
}
