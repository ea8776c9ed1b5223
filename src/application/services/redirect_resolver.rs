//! Redirect decision service.

use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::repositories::UrlRepository;
use crate::domain::shortener::Shortener;
use crate::error::AppError;

/// Resolves short-link request paths to the URL to redirect to.
///
/// # Request Flow
///
/// 1. Check the path shape (prefix, slug length, alphanumeric slug)
/// 2. Look up the record by full short URL
/// 3. Reject the record if it is at or past its expiry
/// 4. Increment the click count, then return the original URL
///
/// Malformed paths never reach the store and expired links never gain clicks.
pub struct RedirectResolver<R: ?Sized, S: ?Sized> {
    repository: Arc<R>,
    shortener: Arc<S>,
}

impl<R, S> RedirectResolver<R, S>
where
    R: UrlRepository + ?Sized,
    S: Shortener + ?Sized,
{
    /// Creates a new redirect resolver.
    pub fn new(repository: Arc<R>, shortener: Arc<S>) -> Self {
        Self {
            repository,
            shortener,
        }
    }

    /// Returns the original URL for a short-link request path.
    ///
    /// A failed click-count increment is logged and does not block the
    /// redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the path is not a valid short link.
    /// Returns [`AppError::NotFound`] if no record exists for it.
    /// Returns [`AppError::Expired`] if the record has expired.
    /// Returns [`AppError::Persistence`] if the lookup fails.
    pub async fn resolve(&self, path: &str) -> Result<String, AppError> {
        let Some(short_url) = self.shortener.short_url_for_path(path) else {
            info!(path = %path, "Invalid short URL provided");
            return Err(AppError::bad_request(
                "Invalid slug",
                json!({ "path": path }),
            ));
        };

        let record = self.repository.find(&short_url).await.inspect_err(|e| {
            if matches!(e, AppError::NotFound { .. }) {
                info!(short_url = %short_url, "URL not found");
            }
        })?;

        if record.is_expired() {
            info!(short_url = %short_url, "Attempted to access expired URL");
            return Err(AppError::expired(
                "URL has expired",
                json!({ "short_url": short_url, "expiry": record.expiry }),
            ));
        }

        if let Err(e) = self.repository.increment_click_count(&short_url).await {
            error!(short_url = %short_url, error = %e, "Failed to increment click count");
        }

        Ok(record.original_url)
    }
}
