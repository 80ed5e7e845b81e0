//! # Data Transfer Objects (DTOs)
//!
//! The stable response shapes this service guarantees, independent of the
//! upstream provider's field names.

pub mod market;

pub use market::*;

use serde::{Deserialize, Serialize};

/// Liveness response for `GET /health`.
///
/// ```json
/// { "status": "ok" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Greeting returned by `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootMessage {
    pub message: String,
}

/// Soft failure body for `GET /bitcoin-price`, returned with status 200.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}
