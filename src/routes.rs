//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /create`        - Shorten a URL
//! - `GET  /r/{slug}`      - Short link redirect (prefix is configurable)
//! - `GET  /health`        - Storage health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with state and tracing applied.
///
/// Trailing slashes are not normalized here; see [`app_router`].
pub fn router(state: AppState, prefix: &str) -> Router {
    api::routes::routes(prefix)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
///
/// Path normalization wraps the router so it runs before route matching.
pub fn app_router(state: AppState, prefix: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, prefix))
}
