//! Short code generation.
//!
//! Codes are drawn uniformly from the 62 ASCII letters and digits.

use rand::{Rng, distr::Alphanumeric};

/// Length of generated short codes.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code of [`CODE_LENGTH`] characters from `[a-zA-Z0-9]`.
///
/// Uniqueness is not checked here; the registry retries on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
