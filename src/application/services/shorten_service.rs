//! Short link creation service.

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::domain::shortener::Shortener;
use crate::error::AppError;
use crate::utils::url_canonicalizer::sanitize_url;

/// Service turning submitted URLs into persisted short-URL records.
///
/// Creation is an upsert keyed by the derived short URL, so resubmitting an
/// equivalent URL refreshes the existing record instead of adding another.
pub struct ShortenService<R: ?Sized, S: ?Sized> {
    repository: Arc<R>,
    shortener: Arc<S>,
    ttl: Duration,
}

impl<R, S> ShortenService<R, S>
where
    R: UrlRepository + ?Sized,
    S: Shortener + ?Sized,
{
    /// Creates a new shorten service. Records expire `ttl` after creation.
    pub fn new(repository: Arc<R>, shortener: Arc<S>, ttl: Duration) -> Self {
        Self {
            repository,
            shortener,
            ttl,
        }
    }

    /// Shortens a URL and persists the resulting record.
    ///
    /// # Flow
    ///
    /// 1. Validate and canonicalize the URL (capped at 2048 characters)
    /// 2. Derive the short URL from the canonical form
    /// 3. Set expiry to now + TTL and the click count to zero
    /// 4. Save (upsert) the record
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] or [`AppError::Parse`] for bad input,
    /// before any storage call is made.
    /// Returns [`AppError::Generation`] if the shortener fails.
    /// Returns [`AppError::Persistence`] if the record cannot be saved.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        let canonical_url = sanitize_url(original_url)?;
        let short_url = self.shortener.generate_short_url(&canonical_url)?;

        let record = UrlRecord::new(canonical_url, short_url, Utc::now() + self.ttl);
        self.repository.save(&record).await?;

        tracing::info!(
            original_url = %record.original_url,
            short_url = %record.short_url,
            "URL shortened successfully"
        );

        Ok(record)
    }
}
