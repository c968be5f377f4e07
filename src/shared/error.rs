//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every failure leaves
//! the HTTP boundary as `{ "error": "<message>" }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Required server-side settings are missing.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller input was rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An outbound call failed. `message` is returned to the caller,
    /// `detail` is only logged.
    #[error("Upstream error: {detail}")]
    Upstream {
        message: &'static str,
        detail: String,
    },
}

/// Error response body
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Configuration(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Configuration(msg) => {
                tracing::warn!("Configuration error: {}", msg);
                msg
            }
            AppError::Validation(msg) => msg,
            AppError::Upstream { message, detail } => {
                tracing::error!(detail = %detail, "{}", message);
                message.to_string()
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
