//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the unified error type for all API endpoints. It implements
//! `axum::response::IntoResponse` to produce structured JSON error responses
//! with appropriate HTTP status codes.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use validator::ValidationErrors;

use campus_core::CoreError;

/// Structured error body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Per-field validation errors, when there are any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API errors with HTTP status code mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Record not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request body or path (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Required fields missing on create (400).
    #[error("validation failed: {message}")]
    ValidationFailed {
        message: String,
        errors: ValidationErrors,
    },

    /// Identifier already taken (409).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::ValidationFailed { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> ApiErrorDetail {
        let (code, message, details) = match self {
            ApiError::NotFound(msg) => ("NOT_FOUND", msg.clone(), None),
            ApiError::BadRequest(msg) => ("BAD_REQUEST", msg.clone(), None),
            ApiError::ValidationFailed { message, errors } => (
                "VALIDATION_FAILED",
                message.clone(),
                serde_json::to_value(errors).ok(),
            ),
            ApiError::Conflict(msg) => ("CONFLICT", msg.clone(), None),
            ApiError::InternalError(msg) => ("INTERNAL_ERROR", msg.clone(), None),
        };
        ApiErrorDetail {
            code: code.to_string(),
            message,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        if status.is_server_error() {
            tracing::error!(code = %detail.code, "{}", detail.message);
        } else {
            tracing::warn!(code = %detail.code, "{}", detail.message);
        }

        (status, axum::Json(detail)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            CoreError::DuplicateId { .. } | CoreError::IdExhausted { .. } => {
                ApiError::Conflict(err.to_string())
            }
            CoreError::MissingFields { ref errors, .. } => ApiError::ValidationFailed {
                message: err.to_string(),
                errors: errors.clone(),
            },
            CoreError::Io(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
