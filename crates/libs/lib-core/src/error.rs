//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by the
//! web layer. It follows the `thiserror` pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Upstream Errors** (502 Bad Gateway)
//!    - [`UpstreamFetch`](AppError::UpstreamFetch) - network failure, timeout, or non-2xx status
//!    - [`InvalidUpstreamData`](AppError::InvalidUpstreamData) - a required field was missing or null
//!
//! 2. **Startup Errors** (500 Internal Server Error)
//!    - [`Config`](AppError::Config) - invalid environment configuration
//!
//! Both upstream variants produce the same response shape for the caller:
//!
//! ```json
//! { "detail": "Failed to fetch Bitcoin price" }
//! ```
//!
//! They are only told apart in the server logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The upstream call failed (transport error or bad status).
    ///
    /// **HTTP Status**: 502 Bad Gateway
    #[error("{0}")]
    UpstreamFetch(String),

    /// The upstream call succeeded but its payload lacked required fields.
    ///
    /// **HTTP Status**: 502 Bad Gateway
    #[error("{0}")]
    InvalidUpstreamData(String),

    /// Configuration error during startup or environment loading.
    ///
    /// **HTTP Status**: 500 Internal Server Error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamFetch(_) | AppError::InvalidUpstreamData(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable detail string returned to the caller.
    pub fn detail(&self) -> String {
        match self {
            AppError::UpstreamFetch(msg) | AppError::InvalidUpstreamData(msg) => msg.clone(),
            AppError::Config(_) => "An internal error occurred".to_string(),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            AppError::UpstreamFetch(_) => "UpstreamFetch",
            AppError::InvalidUpstreamData(_) => "InvalidUpstreamData",
            AppError::Config(_) => "Config",
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(
            kind = self.kind(),
            status = status.as_u16(),
            "Request failed: {}",
            self
        );

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
