//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::IntoResponse,
};

use crate::application::services::with_deadline;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short link to its original URL.
///
/// # Endpoint
///
/// `GET /{prefix}{slug}` (default prefix `/r/`)
///
/// The whole request path is handed to the resolver, which checks the prefix
/// and slug shape before touching storage.
///
/// # Response
///
/// `302 Found` with `Location` set to the original URL. The click count of the
/// record is incremented once per successful redirect.
///
/// # Errors
///
/// Returns 400 Bad Request if the slug has the wrong length or characters.
/// Returns 404 Not Found if the short URL is unknown.
/// Returns 410 Gone if the record has expired.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let original_url = with_deadline(
        state.request_timeout,
        state.redirect_resolver.resolve(uri.path()),
    )
    .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
