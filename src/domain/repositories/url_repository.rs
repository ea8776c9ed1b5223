//! Repository trait for URL record persistence.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for URL records, keyed by full short URL.
///
/// Every operation is a future; dropping it before completion aborts the call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts the record or overwrites the one with the same short URL.
    ///
    /// On conflict `original_url`, `expiry` and `click_count` take the new
    /// values (last write wins).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn save(&self, record: &UrlRecord) -> Result<(), AppError>;

    /// Finds a record by its short URL, including the current click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists.
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn find(&self, short_url: &str) -> Result<UrlRecord, AppError>;

    /// Adds one to the stored click count in a single atomic update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record exists.
    /// Returns [`AppError::Persistence`] on storage errors.
    async fn increment_click_count(&self, short_url: &str) -> Result<(), AppError>;

    /// Returns true if the backing store answers.
    async fn health_check(&self) -> bool;
}
