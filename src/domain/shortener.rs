//! Slug strategy trait.

use crate::error::AppError;

/// Turns canonical URLs into short URLs and recognises short-link paths.
///
/// # Implementations
///
/// - [`crate::application::shortener::CanonicalShortener`] - CRC-32 / base-62 slugs
#[cfg_attr(test, mockall::automock)]
pub trait Shortener: Send + Sync {
    /// Builds the full short URL (domain + prefix + slug) for a canonical URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Generation`] if no slug can be produced.
    fn generate_short_url(&self, canonical_url: &str) -> Result<String, AppError>;

    /// Checks the shape of a request path and returns the short URL it names.
    ///
    /// Returns `None` unless the path is the configured prefix followed by a
    /// slug of the configured length made only of ASCII letters and digits.
    fn short_url_for_path(&self, path: &str) -> Option<String>;
}
