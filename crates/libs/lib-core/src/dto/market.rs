//! # Market Data Transfer Objects
//!
//! Output entities built per request from upstream data and discarded after
//! serialization.
//!
//! ## Null Policy
//!
//! - [`PricePoint`] and [`GlobalMetrics`] are all-or-nothing: every numeric
//!   field is present whenever one is returned.
//! - [`CoinSummary`] keeps its identity fields verbatim and lets each numeric
//!   field degrade to `null` independently.
//!
//! All DTOs use **snake_case** field names in JSON (default serde behavior).

use serde::{Deserialize, Serialize};

/// Current Bitcoin price.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Bitcoin",
///   "price_usd": 67012.0,
///   "timestamp": "2024-03-09T14:05:07.123456+01:00",
///   "note": "Price data provided by CoinGecko"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub name: String,
    pub price_usd: f64,
    /// ISO-8601 wall-clock time at which the response was built.
    pub timestamp: String,
    pub note: String,
}

/// One entry of the multi-coin listing, in upstream market-cap order.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "ethereum",
///   "name": "Ethereum",
///   "price_usd": 3500.12,
///   "change_24h": -1.42,
///   "volume_24h_usd": null
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinSummary {
    pub id: String,
    pub name: String,
    pub price_usd: Option<f64>,
    /// 24h price change in percent.
    pub change_24h: Option<f64>,
    pub volume_24h_usd: Option<f64>,
}

/// Aggregate market metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalMetrics {
    pub total_market_cap_usd: f64,
    pub total_volume_24h_usd: f64,
    pub btc_dominance_percent: f64,
}
