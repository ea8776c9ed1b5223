//! In-process implementation of the URL repository.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::json;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// URL repository backed by a [`DashMap`].
///
/// Selected with a `memory://` database URL. Records live only as long as the
/// process. Each increment runs under the shard lock of its key, which makes it
/// atomic with respect to other increments and saves of the same record.
#[derive(Debug, Default)]
pub struct MemoryUrlRepository {
    records: DashMap<String, UrlRecord>,
}

impl MemoryUrlRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, expired ones included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn save(&self, record: &UrlRecord) -> Result<(), AppError> {
        self.records.insert(record.short_url.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, short_url: &str) -> Result<UrlRecord, AppError> {
        self.records
            .get(short_url)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "short_url": short_url })))
    }

    async fn increment_click_count(&self, short_url: &str) -> Result<(), AppError> {
        let Some(mut entry) = self.records.get_mut(short_url) else {
            return Err(AppError::not_found(
                "URL not found",
                json!({ "short_url": short_url }),
            ));
        };

        entry.click_count += 1;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
