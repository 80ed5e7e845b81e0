//! # Market Service
//!
//! Runs the fetch → validate → map pipeline for each upstream dataset.
//!
//! ## Datasets
//!
//! | Method | Endpoint | Output |
//! |---|---|---|
//! | [`MarketService::bitcoin_price_raw`] | `simple/price` | upstream JSON, untouched |
//! | [`MarketService::bitcoin_price`] | `simple/price` | [`PricePoint`] |
//! | [`MarketService::coins`] | `coins/markets` | `Vec<`[`CoinSummary`]`>` |
//! | [`MarketService::global`] | `global` | [`GlobalMetrics`] |
//!
//! ## Error Handling
//!
//! A [`TransportFailure`] becomes [`AppError::UpstreamFetch`] and an
//! [`InvalidResult`] becomes [`AppError::InvalidUpstreamData`]. Both are logged
//! with their cause here; the caller only sees the detail string.

use lib_core::dto::{CoinSummary, GlobalMetrics, PricePoint};
use lib_core::{AppError, Config, Result};
use lib_upstream::endpoints::{
    bitcoin_price_query, coins_markets_query, COINS_MARKETS, GLOBAL, SIMPLE_PRICE,
};
use lib_upstream::{mapper, validator, InvalidResult, RawResult, TransportFailure, UpstreamClient};
use lib_utils::now_local;
use tracing::{debug, error, instrument};

/// Service for market data operations. Holds no per-request state.
pub struct MarketService {
    upstream: UpstreamClient,
    coins_per_page: u32,
}

impl MarketService {
    pub fn new(upstream: UpstreamClient, config: &Config) -> Self {
        Self {
            upstream,
            coins_per_page: config.coins_per_page,
        }
    }

    /// Fetch the Bitcoin spot price without validation or reshaping.
    #[instrument(skip(self))]
    pub async fn bitcoin_price_raw(&self) -> RawResult {
        self.upstream
            .fetch(SIMPLE_PRICE, &bitcoin_price_query())
            .await
    }

    /// Fetch the Bitcoin spot price as a [`PricePoint`].
    #[instrument(skip(self))]
    pub async fn bitcoin_price(&self) -> Result<PricePoint> {
        let raw = self
            .bitcoin_price_raw()
            .await
            .map_err(|e| fetch_failed("Failed to fetch Bitcoin price", e))?;

        let valid = validator::validate_price(&raw)
            .map_err(|e| invalid_data("Invalid data received from price endpoint", e))?;

        let point = mapper::map_price_point(valid, now_local());
        debug!("[MARKET] Bitcoin price: ${:.2}", point.price_usd);
        Ok(point)
    }

    /// Fetch the top coins by market cap, in upstream order.
    #[instrument(skip(self), fields(per_page = self.coins_per_page))]
    pub async fn coins(&self) -> Result<Vec<CoinSummary>> {
        let raw = self
            .upstream
            .fetch(COINS_MARKETS, &coins_markets_query(self.coins_per_page))
            .await
            .map_err(|e| fetch_failed("Failed to fetch coin market data", e))?;

        let valid = validator::validate_coins(&raw)
            .map_err(|e| invalid_data("Invalid data received from coin markets endpoint", e))?;

        let coins = mapper::map_coin_summaries(valid);
        debug!("[MARKET] Mapped {} coins", coins.len());
        Ok(coins)
    }

    /// Fetch aggregate market metrics.
    #[instrument(skip(self))]
    pub async fn global(&self) -> Result<GlobalMetrics> {
        let raw = self
            .upstream
            .fetch(GLOBAL, &[])
            .await
            .map_err(|e| fetch_failed("Failed to fetch global market data", e))?;

        let valid = validator::validate_global(&raw)
            .map_err(|e| invalid_data("Invalid data received from global endpoint", e))?;

        Ok(mapper::map_global_metrics(valid))
    }
}

fn fetch_failed(detail: &str, failure: TransportFailure) -> AppError {
    error!(reason = failure.reason(), "[MARKET] {}: {}", detail, failure);
    AppError::UpstreamFetch(detail.to_string())
}

fn invalid_data(detail: &str, invalid: InvalidResult) -> AppError {
    error!(entity = %invalid.kind, missing = ?invalid.missing, "[MARKET] {}: {}", detail, invalid);
    AppError::InvalidUpstreamData(detail.to_string())
}
