//! # shorturls
//!
//! A small URL shortening service built with Axum. Links live in memory for
//! the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and the clock abstraction
//! - **Application Layer** ([`application`]) - The concurrent link registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Random 6-character codes or client-chosen ones
//! - Per-link validity window; expired links answer `410 Gone`
//! - Click tracking with referrer, reported through a stats endpoint
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://localhost:8080/"  # Optional
//! cargo run
//!
//! curl -X POST localhost:8080/shorturls -d '{"url":"https://example.com"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkRegistry, RegistrySettings};
    pub use crate::domain::clock::{Clock, ManualClock, SystemClock};
    pub use crate::domain::entities::{Click, Link, LinkStats, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
