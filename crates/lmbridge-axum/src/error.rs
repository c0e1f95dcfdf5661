//! Axum-specific error types and mappings.
//!
//! Maps the core completion taxonomy to HTTP statuses. Every failure
//! carries a small machine-readable JSON body instead of a bare status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lmbridge_core::{CompletionError, ResolveError};
use serde::Serialize;
use thiserror::Error;

/// Adapter-level error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Bad request (malformed body, missing required field).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found (unknown model).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Service unavailable (transcript actor unresponsive).
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Internal server error (engine load/generation, registry contract).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        tracing::warn!(status = status.as_u16(), error = %message, "request failed");

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<CompletionError> for HttpError {
    fn from(err: CompletionError) -> Self {
        match &err {
            CompletionError::MalformedInput(_) | CompletionError::MissingField(_) => {
                Self::BadRequest(err.to_string())
            }
            CompletionError::UnknownModel(_) => Self::NotFound(err.to_string()),
            CompletionError::TranscriptUnavailable(_) => {
                Self::ServiceUnavailable(err.to_string())
            }
            CompletionError::LoadFailure(_)
            | CompletionError::GenerationFailure(_)
            | CompletionError::Naming(_)
            | CompletionError::Registry(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<ResolveError> for HttpError {
    fn from(err: ResolveError) -> Self {
        Self::Internal(err.to_string())
    }
}
