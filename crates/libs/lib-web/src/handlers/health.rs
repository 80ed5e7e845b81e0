//! # Health Handlers
//!
//! Endpoints that answer without touching the upstream provider.

use axum::Json;
use lib_core::dto::{HealthResponse, RootMessage};

/// **Route**: `GET /`
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "Hello World! Market data facade is running.".to_string(),
    })
}

/// **Route**: `GET /health`
///
/// Always `200 {"status": "ok"}`, regardless of upstream reachability.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
