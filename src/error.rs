//! Error taxonomy for the shortening core and its HTTP mapping.
//!
//! The core distinguishes exactly two failure kinds: input the caller can
//! correct ([`AppError::InvalidInput`]) and transient overload
//! ([`AppError::Overloaded`]). A decode miss is deliberately NOT an error;
//! it is reported as a successful result carrying a sentinel payload (see
//! [`crate::application::services::shortener_service`]).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON error envelope returned by every failing endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
}

/// Application error kinds.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed, empty, or syntactically invalid input. Recoverable by the
    /// caller correcting the request; never retried automatically.
    #[error("{message}")]
    InvalidInput { message: String },

    /// No free admission permit at call time. Recoverable by retrying later;
    /// the core performs no internal retry or backoff.
    #[error("Too many concurrent requests")]
    Overloaded,
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        Self::invalid_input("Invalid input")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::InvalidInput { message } => {
                (StatusCode::BAD_REQUEST, "validation_error", message)
            }
            AppError::Overloaded => (
                StatusCode::TOO_MANY_REQUESTS,
                "too_many_requests",
                "Too many concurrent requests".to_string(),
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo { code, message },
        };

        (status, Json(body)).into_response()
    }
}
