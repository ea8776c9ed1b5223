//! Shared application state injected into every handler.

use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{RedirectResolver, ShortenService};
use crate::domain::repositories::UrlRepository;
use crate::domain::shortener::Shortener;

/// Application state cloned per request by Axum.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<dyn UrlRepository, dyn Shortener>>,
    pub redirect_resolver: Arc<RedirectResolver<dyn UrlRepository, dyn Shortener>>,
    pub repository: Arc<dyn UrlRepository>,
    /// Deadline applied to each shorten and redirect operation.
    pub request_timeout: Duration,
}

impl AppState {
    /// Wires the services around a repository and a shortener.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        shortener: Arc<dyn Shortener>,
        ttl: chrono::Duration,
        request_timeout: Duration,
    ) -> Self {
        let shorten_service = Arc::new(ShortenService::new(
            repository.clone(),
            shortener.clone(),
            ttl,
        ));
        let redirect_resolver = Arc::new(RedirectResolver::new(repository.clone(), shortener));

        Self {
            shorten_service,
            redirect_resolver,
            repository,
            request_timeout,
        }
    }
}
