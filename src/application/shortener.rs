//! Checksum-based [`Shortener`] implementation.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::shortener::Shortener;
use crate::error::AppError;
use crate::utils::slug_generator::generate_slug;

/// Compiled regex for slug shape validation.
static SLUG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").expect("slug regex is valid"));

/// Settings for building and recognising short URLs.
#[derive(Debug, Clone)]
pub struct ShortenerConfig {
    /// Serving domain including scheme, e.g. `http://tiny.io`.
    pub domain: String,
    /// Path prefix wrapped in slashes, e.g. `/r/`.
    pub prefix: String,
    pub slug_length: usize,
}

/// Derives slugs from the CRC-32 checksum of the canonical URL.
///
/// The input must already be canonical; see
/// [`crate::utils::url_canonicalizer::canonicalize`].
pub struct CanonicalShortener {
    config: ShortenerConfig,
}

impl CanonicalShortener {
    /// Creates a shortener. A trailing `/` on the domain is dropped.
    pub fn new(mut config: ShortenerConfig) -> Self {
        let trimmed = config.domain.trim_end_matches('/').len();
        config.domain.truncate(trimmed);
        Self { config }
    }

    /// Returns the slug for a canonical URL.
    pub fn generate_slug(&self, canonical_url: &str) -> String {
        generate_slug(canonical_url, self.config.slug_length)
    }

    fn compose(&self, slug: &str) -> String {
        format!("{}{}{}", self.config.domain, self.config.prefix, slug)
    }

    fn is_valid_slug(&self, slug: &str) -> bool {
        slug.len() == self.config.slug_length && SLUG_REGEX.is_match(slug)
    }
}

impl Shortener for CanonicalShortener {
    fn generate_short_url(&self, canonical_url: &str) -> Result<String, AppError> {
        Ok(self.compose(&self.generate_slug(canonical_url)))
    }

    fn short_url_for_path(&self, path: &str) -> Option<String> {
        let slug = path.strip_prefix(&self.config.prefix)?;
        self.is_valid_slug(slug).then(|| self.compose(slug))
    }
}
