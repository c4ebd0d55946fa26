//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`          - Create a short link
//! - `GET  /shorturls/{code}`   - Link statistics
//! - `GET  /{code}`             - Short link redirect
//!
//! # Middleware
//!
//! - **Access log** - One structured log event per request
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::access_log::access_log;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the router with state and access logging attached.
///
/// Integration tests drive this directly; [`app_router`] wraps it for serving.
pub fn router(state: AppState) -> Router {
    api::routes::routes()
        .with_state(state)
        .layer(middleware::from_fn(access_log))
}

/// Constructs the application service with all routes and middleware.
///
/// Trailing slashes are trimmed before routing, so `/shorturls/abc/` reaches
/// the stats handler as `abc`. `/shorturls/` itself names an empty code and
/// is matched before trimming, answering 404 instead of reaching the create
/// route.
pub fn app_router(state: AppState) -> Router {
    let normalized = NormalizePathLayer::trim_trailing_slash().layer(router(state));

    Router::new()
        .route("/shorturls/", get(not_found_handler))
        .route_layer(middleware::from_fn(access_log))
        .fallback_service(normalized)
}
