//! Utility functions for code generation, URL checks and formatting.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - Target URL validation and `Location` encoding
//! - [`timestamp`] - RFC 3339 formatting for responses

pub mod code_generator;
pub mod timestamp;
pub mod url_validator;
