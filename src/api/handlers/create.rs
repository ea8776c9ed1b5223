//! Handler for link creation endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::create::{CreateRequest, UrlRecordResponse};
use crate::application::services::with_deadline;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or refreshes) the short URL for a long URL.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://www.example.com?b=2&a=1" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "original_url": "https://example.com?a=1&b=2",
///   "short_url": "http://tiny.io/r/0aCO2h",
///   "expiry": "2030-01-08T12:00:00Z",
///   "click_count": 0
/// }
/// ```
///
/// Equivalent URLs share one record; resubmitting refreshes its expiry and
/// resets its click count.
///
/// # Errors
///
/// Returns 400 Bad Request for malformed JSON or an invalid URL.
/// Returns 500 Internal Server Error if the record cannot be saved.
/// Returns 503 Service Unavailable if the request deadline elapses.
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UrlRecordResponse>), AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let record = with_deadline(
        state.request_timeout,
        state.shorten_service.shorten(&request.original_url),
    )
    .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}
