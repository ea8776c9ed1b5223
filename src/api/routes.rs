//! API route configuration.

use crate::api::handlers::{create_handler, health_handler, redirect_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes of the service.
///
/// # Endpoints
///
/// - `POST /create`            - Shorten a URL
/// - `GET  /health`            - Storage health check
/// - `GET  {prefix}{*slug}`    - Redirect a short link
///
/// Everything below `prefix` is routed to the redirect handler so that
/// malformed slugs are answered with 400 rather than falling through to 404.
pub fn routes(prefix: &str) -> Router<AppState> {
    Router::new()
        .route("/create", post(create_handler))
        .route("/health", get(health_handler))
        .route(&format!("{prefix}{{*slug}}"), get(redirect_handler))
}
