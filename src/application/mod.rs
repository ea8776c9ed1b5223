//! Application layer: slug strategy and service orchestration.
//!
//! - [`shortener::CanonicalShortener`] - Checksum-based slug strategy
//! - [`services::ShortenService`] - Shortening workflow
//! - [`services::RedirectResolver`] - Redirect decision workflow

pub mod services;
pub mod shortener;
