//! # Application Configuration
//!
//! Upstream provider settings loaded once from environment variables at startup.
//! The resulting [`Config`] is immutable and shared through the router state;
//! there is no global configuration instance.
//!
//! ## Environment Variables
//!
//! | Variable | Default |
//! |---|---|
//! | `UPSTREAM_BASE_URL` | `https://api.coingecko.com/api/v3` |
//! | `COINS_PER_PAGE` | `10` |
//!
//! The outbound timeout is fixed at [`UPSTREAM_TIMEOUT_SECS`] and cannot be overridden.

use crate::error::{AppError, Result};
use lib_utils::{get_env_or, get_env_parse_or};
use std::time::Duration;

/// Default upstream provider base URL.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Outbound request timeout in seconds.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Default number of coins requested from the markets endpoint.
pub const DEFAULT_COINS_PER_PAGE: u32 = 10;

/// Largest page size the markets endpoint accepts.
pub const MAX_COINS_PER_PAGE: u32 = 250;

/// Application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the upstream market-data API, without a trailing slash.
    pub upstream_base_url: String,

    /// Timeout applied to every outbound request.
    pub upstream_timeout: Duration,

    /// `per_page` value sent to the multi-coin listing endpoint.
    pub coins_per_page: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_UPSTREAM_BASE_URL)
    }
}

impl Config {
    /// Build a configuration pointing at `base_url` with every other value defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            upstream_base_url: base_url.into().trim_end_matches('/').to_string(),
            upstream_timeout: Duration::from_secs(UPSTREAM_TIMEOUT_SECS),
            coins_per_page: DEFAULT_COINS_PER_PAGE,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url = get_env_or("UPSTREAM_BASE_URL", DEFAULT_UPSTREAM_BASE_URL);

        let coins_per_page = get_env_parse_or("COINS_PER_PAGE", DEFAULT_COINS_PER_PAGE)
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            coins_per_page,
            ..Self::with_base_url(base_url)
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let url = self.upstream_base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "UPSTREAM_BASE_URL must be an http(s) URL, got '{}'",
                url
            )));
        }

        if !(1..=MAX_COINS_PER_PAGE).contains(&self.coins_per_page) {
            return Err(AppError::Config(format!(
                "COINS_PER_PAGE must be between 1 and {}",
                MAX_COINS_PER_PAGE
            )));
        }

        Ok(())
    }

    /// Join an endpoint path onto the upstream base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.upstream_base_url,
            endpoint.trim_start_matches('/')
        )
    }
}
