//! # Field Mapper
//!
//! Reshapes validated upstream data into the stable output schema. Mapping is
//! deterministic: the only input not taken from the payload is the timestamp
//! handed to [`map_price_point`].

use crate::validator::ValidCoin;
use chrono::{DateTime, Local};
use lib_core::dto::{CoinSummary, GlobalMetrics, PricePoint};
use lib_utils::format_iso;
use serde_json::Value;

/// Display name attached to every [`PricePoint`].
pub const PRICE_NAME: &str = "Bitcoin";

/// Fixed note attached to every [`PricePoint`].
pub const PRICE_NOTE: &str = "Price data provided by CoinGecko";

/// Upstream coin field → output field.
///
/// `id` and `name` are copied verbatim; the rest are optional numbers.
pub const COIN_FIELD_MAP: [(&str, &str); 5] = [
    ("id", "id"),
    ("name", "name"),
    ("current_price", "price_usd"),
    ("price_change_percentage_24h", "change_24h"),
    ("total_volume", "volume_24h_usd"),
];

/// Build a [`PricePoint`] from the validated `bitcoin.usd` value.
pub fn map_price_point([price_usd]: [f64; 1], at: DateTime<Local>) -> PricePoint {
    PricePoint {
        name: PRICE_NAME.to_string(),
        price_usd,
        timestamp: format_iso(at),
        note: PRICE_NOTE.to_string(),
    }
}

/// Rename every coin entry, keeping upstream order.
pub fn map_coin_summaries(coins: Vec<ValidCoin<'_>>) -> Vec<CoinSummary> {
    coins.into_iter().map(map_coin_summary).collect()
}

fn map_coin_summary(coin: ValidCoin<'_>) -> CoinSummary {
    let [_, _, price, change, volume] = COIN_FIELD_MAP.map(|(upstream, _)| upstream);
    let number = |key: &str| coin.entry.get(key).and_then(Value::as_f64);

    CoinSummary {
        id: coin.id.to_string(),
        name: coin.name.to_string(),
        price_usd: number(price),
        change_24h: number(change),
        volume_24h_usd: number(volume),
    }
}

/// Build [`GlobalMetrics`] from the three validated `data.*` values.
pub fn map_global_metrics(
    [total_market_cap_usd, total_volume_24h_usd, btc_dominance_percent]: [f64; 3],
) -> GlobalMetrics {
    GlobalMetrics {
        total_market_cap_usd,
        total_volume_24h_usd,
        btc_dominance_percent,
    }
}
