//! Business logic services for the application layer.
//!
//! Services hold no mutable state of their own; all state lives behind the
//! injected [`crate::domain::repositories::UrlRepository`].

pub mod redirect_resolver;
pub mod shorten_service;

pub use redirect_resolver::RedirectResolver;
pub use shorten_service::ShortenService;

use serde_json::json;
use std::future::Future;
use std::time::Duration;

use crate::error::AppError;

/// Runs `operation` under a deadline.
///
/// When the deadline elapses the operation future is dropped, which aborts any
/// in-flight store call, and [`AppError::Timeout`] is returned.
pub async fn with_deadline<T, F>(deadline: Duration, operation: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    tokio::time::timeout(deadline, operation)
        .await
        .unwrap_or_else(|_| {
            Err(AppError::timeout(
                "Request timed out",
                json!({ "timeout_ms": deadline.as_millis() as u64 }),
            ))
        })
}
