//! # Response Validator
//!
//! Checks that an upstream JSON body carries the fields an entity needs.
//!
//! Path resolution never fails loudly: a missing key, a missing container, or
//! an explicit `null` at any level all resolve to `None`. What a missing value
//! means is decided per entity:
//!
//! | Entity | Required | Missing required field |
//! |---|---|---|
//! | PricePoint | `bitcoin.usd` | whole response invalid |
//! | GlobalMetrics | `data.total_market_cap.usd`, `data.total_volume.usd`, `data.market_cap_percentage.btc` | whole response invalid |
//! | CoinSummary | `id`, `name` per entry | whole response invalid; other fields pass through as null |

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Paths required for a [`PricePoint`](lib_core::dto::PricePoint).
pub const PRICE_POINT_PATHS: [&str; 1] = ["bitcoin.usd"];

/// Paths required for [`GlobalMetrics`](lib_core::dto::GlobalMetrics).
pub const GLOBAL_METRICS_PATHS: [&str; 3] = [
    "data.total_market_cap.usd",
    "data.total_volume.usd",
    "data.market_cap_percentage.btc",
];

/// Identity paths required on every coin entry.
pub const COIN_IDENTITY_PATHS: [&str; 2] = ["id", "name"];

/// The output entity a payload is validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    PricePoint,
    CoinSummary,
    GlobalMetrics,
}

impl EntityKind {
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::PricePoint => "PricePoint",
            EntityKind::CoinSummary => "CoinSummary",
            EntityKind::GlobalMetrics => "GlobalMetrics",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A payload that lacks fields required for `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} payload is missing required fields: {}", .missing.join(", "))]
pub struct InvalidResult {
    pub kind: EntityKind,
    pub missing: Vec<String>,
}

/// A coin entry whose identity fields resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidCoin<'a> {
    pub id: &'a str,
    pub name: &'a str,
    /// The full upstream entry, for optional fields.
    pub entry: &'a Value,
}

/// Walk a dotted path such as `data.total_volume.usd`.
///
/// Returns `None` when any segment is absent, when an intermediate value is not
/// an object, or when the final value is `null`.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_object()?.get(key))
        .filter(|resolved| !resolved.is_null())
}

/// Resolve every path to a number, or report all paths that did not.
///
/// A value that is present but not numeric counts as missing.
pub fn require_numbers<const N: usize>(
    value: &Value,
    kind: EntityKind,
    paths: [&str; N],
) -> Result<[f64; N], InvalidResult> {
    let resolved = paths.map(|path| resolve_path(value, path).and_then(Value::as_f64));

    let missing: Vec<String> = paths
        .iter()
        .zip(resolved.iter())
        .filter(|(_, number)| number.is_none())
        .map(|(path, _)| path.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(InvalidResult { kind, missing });
    }

    Ok(resolved.map(|number| number.unwrap_or_default()))
}

/// Validate a simple-price payload for a [`PricePoint`](lib_core::dto::PricePoint).
pub fn validate_price(value: &Value) -> Result<[f64; 1], InvalidResult> {
    require_numbers(value, EntityKind::PricePoint, PRICE_POINT_PATHS)
}

/// Validate a global payload for [`GlobalMetrics`](lib_core::dto::GlobalMetrics).
pub fn validate_global(value: &Value) -> Result<[f64; 3], InvalidResult> {
    require_numbers(value, EntityKind::GlobalMetrics, GLOBAL_METRICS_PATHS)
}

/// Validate a markets payload: a JSON array whose entries all carry string
/// `id` and `name`. Numeric fields are not inspected.
pub fn validate_coins(value: &Value) -> Result<Vec<ValidCoin<'_>>, InvalidResult> {
    let entries = value.as_array().ok_or_else(|| InvalidResult {
        kind: EntityKind::CoinSummary,
        missing: vec!["[]".to_string()],
    })?;

    let mut coins = Vec::with_capacity(entries.len());
    let mut missing = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let [id, name] = COIN_IDENTITY_PATHS.map(|path| resolve_path(entry, path).and_then(Value::as_str));

        match (id, name) {
            (Some(id), Some(name)) => coins.push(ValidCoin { id, name, entry }),
            _ => {
                for (path, found) in COIN_IDENTITY_PATHS.iter().zip([id, name]) {
                    if found.is_none() {
                        missing.push(format!("[{}].{}", index, path));
                    }
                }
            }
        }
    }

    if !missing.is_empty() {
        return Err(InvalidResult {
            kind: EntityKind::CoinSummary,
            missing,
        });
    }

    Ok(coins)
}
