//! Application error type shared by every layer.
//!
//! Each variant maps to exactly one HTTP status class, so handlers can return
//! `Result<_, AppError>` and let [`IntoResponse`] do the translation.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload returned to API clients.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors produced while shortening or resolving URLs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Bad, empty, oversized or wrong-scheme input. Always client-caused.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The submitted text is not a structurally valid URL.
    #[error("{message}")]
    Parse { message: String, details: Value },

    /// Slug generation failed. Reserved for collision handling.
    #[error("{message}")]
    Generation { message: String, details: Value },

    /// No record exists for the requested short code.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// The record exists but its expiry has passed.
    #[error("{message}")]
    Expired { message: String, details: Value },

    /// The backing store failed.
    #[error("{message}")]
    Persistence { message: String, details: Value },

    /// The request deadline elapsed before the operation finished.
    #[error("{message}")]
    Timeout { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn parse(message: impl Into<String>, details: Value) -> Self {
        Self::Parse {
            message: message.into(),
            details,
        }
    }

    pub fn generation(message: impl Into<String>, details: Value) -> Self {
        Self::Generation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }

    pub fn persistence(message: impl Into<String>, details: Value) -> Self {
        Self::Persistence {
            message: message.into(),
            details,
        }
    }

    pub fn timeout(message: impl Into<String>, details: Value) -> Self {
        Self::Timeout {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Parse { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Expired { .. } => StatusCode::GONE,
            AppError::Generation { .. } | AppError::Persistence { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Timeout { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Converts the error into the serializable payload used in responses.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Parse { message, details } => ("parse_error", message, details),
            AppError::Generation { message, details } => ("generation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Expired { message, details } => ("expired", message, details),
            AppError::Persistence { message, details } => ("persistence_error", message, details),
            AppError::Timeout { message, details } => ("timeout", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut error = self.to_error_info();

        // Driver messages stay in the logs, not in the response.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(code = error.code, details = %error.details, "{}", error.message);
            error.details = json!({});
        }

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::not_found("URL not found", json!({})),
            other => AppError::persistence(
                "Database error",
                json!({ "reason": other.to_string() }),
            ),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON format",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Invalid input data",
            serde_json::to_value(&errors).unwrap_or_else(|_| json!({})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::parse("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::expired("x", json!({})).status_code(),
            StatusCode::GONE
        );
        assert_eq!(
            AppError::generation("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::persistence("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::timeout("x", json!({})).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[test]
    fn test_other_sqlx_errors_map_to_persistence() {
        let err: AppError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, AppError::Persistence { .. }));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::expired("URL has expired", json!({ "short_url": "x" }));
        assert_eq!(err.to_string(), "URL has expired");
        assert_eq!(err.to_error_info().code, "expired");
    }
}
