//! # Upstream Endpoints
//!
//! Endpoint paths and query presets for the three upstream datasets.

/// Spot price endpoint.
pub const SIMPLE_PRICE: &str = "simple/price";

/// Multi-coin market listing endpoint.
pub const COINS_MARKETS: &str = "coins/markets";

/// Global market metrics endpoint.
pub const GLOBAL: &str = "global";

/// Query for the Bitcoin spot price in USD.
pub fn bitcoin_price_query() -> Vec<(&'static str, String)> {
    vec![
        ("ids", "bitcoin".to_string()),
        ("vs_currencies", "usd".to_string()),
    ]
}

/// Query for the first page of coins ordered by descending market cap.
pub fn coins_markets_query(per_page: u32) -> Vec<(&'static str, String)> {
    vec![
        ("vs_currency", "usd".to_string()),
        ("order", "market_cap_desc".to_string()),
        ("per_page", per_page.to_string()),
        ("page", "1".to_string()),
    ]
}
