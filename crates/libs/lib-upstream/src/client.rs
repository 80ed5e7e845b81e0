//! # Upstream HTTP Client
//!
//! Single-attempt GET requests against the upstream market-data API.
//!
//! Every call is bounded by the configured timeout and classified into one of:
//! - `Ok(Value)` - 2xx response with a JSON body
//! - [`TransportFailure::BadStatus`] - non-2xx response
//! - [`TransportFailure::Network`] - connection error or timeout
//! - [`TransportFailure::Decode`] - 2xx response that is not JSON
//!
//! There are no retries; a failure is final for the request that triggered it.

use crate::types::{RawResult, TransportFailure};
use lib_core::Config;
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("market-facade/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the upstream provider.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: Client,
    config: Config,
}

impl UpstreamClient {
    /// Create a new client with the configured timeout.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    /// The timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.config.upstream_timeout
    }

    /// Issue one GET to `endpoint` with `query_params` and parse the body as JSON.
    pub async fn fetch(&self, endpoint: &str, query_params: &[(&str, String)]) -> RawResult {
        let url = self.config.endpoint_url(endpoint);
        debug!("[UPSTREAM] GET {} {:?}", url, query_params);

        let response = match self.http.get(&url).query(query_params).send().await {
            Ok(response) => response,
            Err(e) => {
                let message = if e.is_timeout() {
                    format!("request timed out after {}s", self.timeout().as_secs_f64())
                } else {
                    e.to_string()
                };
                warn!(endpoint, reason = "network_error", "[UPSTREAM] {} failed: {}", url, message);
                return Err(TransportFailure::Network(message));
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                endpoint,
                reason = "bad_status",
                status = status.as_u16(),
                "[UPSTREAM] {} returned {}",
                url,
                status
            );
            return Err(TransportFailure::BadStatus {
                code: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            warn!(endpoint, reason = "network_error", "[UPSTREAM] {} body read failed: {}", url, e);
            TransportFailure::Network(e.to_string())
        })?;

        serde_json::from_slice::<Value>(&bytes).map_err(|e| {
            warn!(endpoint, reason = "decode_error", "[UPSTREAM] {} returned non-JSON body: {}", url, e);
            TransportFailure::Decode(e.to_string())
        })
    }
}
