//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Row shape of the `urls` table.
#[derive(sqlx::FromRow)]
struct UrlRow {
    short_url: String,
    original_url: String,
    expiry: DateTime<Utc>,
    click_count: i64,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        Self {
            original_url: row.original_url,
            short_url: row.short_url,
            expiry: row.expiry,
            click_count: row.click_count,
        }
    }
}

/// PostgreSQL repository for URL records.
///
/// Uses bound parameters throughout. The click counter is updated server-side
/// with `click_count = click_count + 1`, so concurrent redirects never lose
/// an increment.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, record: &UrlRecord) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO urls (short_url, original_url, expiry, click_count)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (short_url) DO UPDATE
            SET original_url = EXCLUDED.original_url,
                expiry = EXCLUDED.expiry,
                click_count = EXCLUDED.click_count
            "#,
        )
        .bind(&record.short_url)
        .bind(&record.original_url)
        .bind(record.expiry)
        .bind(record.click_count)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find(&self, short_url: &str) -> Result<UrlRecord, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT short_url, original_url, expiry, click_count
            FROM urls
            WHERE short_url = $1
            "#,
        )
        .bind(short_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(UrlRecord::from).ok_or_else(|| {
            AppError::not_found("URL not found", json!({ "short_url": short_url }))
        })
    }

    async fn increment_click_count(&self, short_url: &str) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE urls SET click_count = click_count + 1 WHERE short_url = $1")
                .bind(short_url)
                .execute(self.pool.as_ref())
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "URL not found",
                json!({ "short_url": short_url }),
            ));
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
