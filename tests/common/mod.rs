#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use canonical_shortener::application::shortener::{CanonicalShortener, ShortenerConfig};
use canonical_shortener::domain::entities::UrlRecord;
use canonical_shortener::domain::repositories::UrlRepository;
use canonical_shortener::error::AppError;
use canonical_shortener::infrastructure::persistence::MemoryUrlRepository;
use canonical_shortener::routes::router;
use canonical_shortener::state::AppState;
use chrono::{Duration, Utc};
use std::sync::Arc;

pub const DOMAIN: &str = "http://sho.rt";
pub const PREFIX: &str = "/s/";

pub fn create_test_state(
    repository: Arc<dyn UrlRepository>,
    timeout: std::time::Duration,
) -> AppState {
    let shortener = Arc::new(CanonicalShortener::new(ShortenerConfig {
        domain: DOMAIN.to_string(),
        prefix: PREFIX.to_string(),
        slug_length: 6,
    }));

    AppState::new(repository, shortener, Duration::hours(168), timeout)
}

pub fn create_test_app(repository: Arc<dyn UrlRepository>) -> Router {
    router(
        create_test_state(repository, std::time::Duration::from_secs(5)),
        PREFIX,
    )
}

/// Server backed by a fresh in-memory repository, returned for inspection.
pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let repository = Arc::new(MemoryUrlRepository::new());
    let server = TestServer::new(create_test_app(repository.clone())).unwrap();
    (server, repository)
}

pub async fn create_test_record(
    repository: &MemoryUrlRepository,
    slug: &str,
    url: &str,
    expires_in: Duration,
) -> UrlRecord {
    let record = UrlRecord::new(
        url.to_string(),
        format!("{DOMAIN}{PREFIX}{slug}"),
        Utc::now() + expires_in,
    );
    repository.save(&record).await.unwrap();
    record
}

/// Repository whose every call takes longer than any test deadline.
pub struct SlowRepository;

#[async_trait]
impl UrlRepository for SlowRepository {
    async fn save(&self, _record: &UrlRecord) -> Result<(), AppError> {
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        Ok(())
    }

    async fn find(&self, _short_url: &str) -> Result<UrlRecord, AppError> {
        tokio::time::sleep(std::time::Duration::from_secs(10)).await;
        Err(AppError::not_found("URL not found", serde_json::json!({})))
    }

    async fn increment_click_count(&self, _short_url: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        false
    }
}
