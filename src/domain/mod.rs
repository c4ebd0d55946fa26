//! Domain layer containing business entities and the clock abstraction.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`clock`] - Time source injected into the registry
//!
//! The domain layer has no dependencies on the HTTP layer. Business rules that
//! span entities live in [`crate::application::services`].

pub mod clock;
pub mod entities;
