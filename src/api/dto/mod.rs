//! Data Transfer Objects for API requests and responses.
//!
//! Field names follow the public JSON contract (`shortLink`, `totalClicks`,
//! `originalURL`), so most structs carry Serde renames.

pub mod clicks;
pub mod shorten;
pub mod stats;
