//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; the concurrency rules around them live
//! in [`crate::application::services::LinkRegistry`].
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL mapping with its validity window
//! - [`Click`] - A redirect event on a shortened link
//! - [`LinkStats`] - A snapshot of a link together with its clicks
//!
//! `NewLink` carries the input for creating a link.

pub mod click;
pub mod link;

pub use click::Click;
pub use link::{Link, LinkStats, NewLink};
