//! # Market Handlers
//!
//! HTTP endpoints for upstream market data. Every request re-fetches upstream;
//! nothing is cached.
//!
//! ## Endpoints
//!
//! - `GET /bitcoin-price` - Upstream price JSON as received
//! - `GET /api/coins/bitcoin` - [`PricePoint`]
//! - `GET /api/coins` - ordered array of [`CoinSummary`]
//! - `GET /api/global` - [`GlobalMetrics`]
//!
//! ## Request Examples
//!
//! ```bash
//! curl http://localhost:8000/api/coins/bitcoin
//! curl http://localhost:8000/api/coins
//! curl http://localhost:8000/api/global
//! ```

use crate::services::MarketService;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use lib_core::dto::{CoinSummary, ErrorResponse, GlobalMetrics, PricePoint};
use lib_core::AppError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Get the upstream Bitcoin price payload unchanged.
///
/// **Route**: `GET /bitcoin-price`
///
/// # Returns
///
/// Success (200): the upstream JSON, e.g. `{"bitcoin": {"usd": 67012}}`
///
/// Failure (200): `{"error": "<reason>"}`. This route never answers with an
/// HTTP error status.
#[instrument(skip(market))]
pub async fn get_bitcoin_price_raw(State(market): State<Arc<MarketService>>) -> Response {
    match market.bitcoin_price_raw().await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            warn!("[MARKET] Raw price fetch failed: {}", e);
            Json(ErrorResponse {
                error: e.to_string(),
            })
            .into_response()
        }
    }
}

/// Get the current Bitcoin price.
///
/// **Route**: `GET /api/coins/bitcoin`
///
/// # Returns
///
/// Success (200): `Json<PricePoint>`
///
/// Error (502): upstream unreachable, non-2xx, or `bitcoin.usd` missing
///
/// # Example
///
/// ```json
/// {
///   "name": "Bitcoin",
///   "price_usd": 67012.0,
///   "timestamp": "2024-03-09T14:05:07.123456+01:00",
///   "note": "Price data provided by CoinGecko"
/// }
/// ```
#[instrument(skip(market))]
pub async fn get_bitcoin(
    State(market): State<Arc<MarketService>>,
) -> Result<Json<PricePoint>, AppError> {
    let point = market.bitcoin_price().await?;
    info!("[MARKET] Returning Bitcoin price");
    Ok(Json(point))
}

/// Get the top coins by market capitalization.
///
/// **Route**: `GET /api/coins`
///
/// # Returns
///
/// Success (200): `Json<Vec<CoinSummary>>` in upstream order. Numeric fields
/// the upstream omits are `null`.
///
/// Error (502): upstream unreachable, non-2xx, not an array, or an entry
/// without `id`/`name`
#[instrument(skip(market))]
pub async fn get_coins(
    State(market): State<Arc<MarketService>>,
) -> Result<Json<Vec<CoinSummary>>, AppError> {
    let coins = market.coins().await?;
    info!("[MARKET] Returning {} coins", coins.len());
    Ok(Json(coins))
}

/// Get global market metrics.
///
/// **Route**: `GET /api/global`
///
/// # Returns
///
/// Success (200): `Json<GlobalMetrics>`
///
/// Error (502): upstream unreachable, non-2xx, or any of the three metrics missing
#[instrument(skip(market))]
pub async fn get_global(
    State(market): State<Arc<MarketService>>,
) -> Result<Json<GlobalMetrics>, AppError> {
    let metrics = market.global().await?;
    info!("[MARKET] Returning global metrics");
    Ok(Json(metrics))
}
