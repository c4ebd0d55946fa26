//! Application layer services implementing business logic.
//!
//! Services own the business rules (code selection, validity windows, click
//! recording) and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::registry::LinkRegistry`] - Concurrent short link store with click analytics

pub mod services;
