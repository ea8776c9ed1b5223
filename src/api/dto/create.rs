//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlRecord;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequest {
    /// The URL to shorten. Scheme and length are checked by the service.
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,
}

/// Created (or refreshed) short-URL record.
#[derive(Debug, Serialize)]
pub struct UrlRecordResponse {
    pub original_url: String,
    pub short_url: String,
    pub expiry: DateTime<Utc>,
    pub click_count: i64,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            original_url: record.original_url,
            short_url: record.short_url,
            expiry: record.expiry,
            click_count: record.click_count,
        }
    }
}
