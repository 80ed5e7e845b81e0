//! # Handler Tests
//!
//! Drive the full router with `tower::ServiceExt::oneshot` against a
//! `wiremock` stand-in for the upstream provider.

mod market;

use crate::server::{create_router, AppState};
use crate::services::MarketService;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lib_core::Config;
use lib_upstream::UpstreamClient;
use serde_json::Value;
use tower::ServiceExt;

/// Build the application against `base_url` as the upstream provider.
pub fn test_app(base_url: &str) -> Router {
    let config = Config::with_base_url(base_url);
    let upstream = UpstreamClient::new(&config).expect("client should build in test");
    let state = AppState::new(MarketService::new(upstream, &config));
    create_router(state, &["http://localhost:3000".to_string()])
}

/// Upstream base URL nothing listens on.
pub fn unreachable_upstream() -> &'static str {
    "http://127.0.0.1:1"
}

/// Send a GET and return the status and parsed JSON body.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).expect("response body should be JSON");

    (status, json)
}
