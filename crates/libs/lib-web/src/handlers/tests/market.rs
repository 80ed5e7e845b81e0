//! # Market Handler Tests
//!
//! Each route is checked for its success shape and for the 502 path it takes
//! when the upstream call or the payload fails.

use super::*;
use chrono::DateTime;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn upstream_returning(route: &str, template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn assert_bad_gateway(status: StatusCode, body: &Value) {
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let detail = body["detail"].as_str().expect("detail should be a string");
    assert!(!detail.is_empty());
}

// region: --- /api/coins/bitcoin

#[tokio::test]
async fn test_bitcoin_price_maps_upstream_price() {
    // Arrange
    let server = upstream_returning(
        "/simple/price",
        ResponseTemplate::new(200).set_body_json(json!({"bitcoin": {"usd": 67012.5}})),
    )
    .await;

    // Act
    let (status, body) = get_json(test_app(&server.uri()), "/api/coins/bitcoin").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Bitcoin");
    assert_eq!(body["price_usd"], 67012.5);
    assert_eq!(body["note"], "Price data provided by CoinGecko");
    let timestamp = body["timestamp"].as_str().expect("timestamp should be a string");
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_bitcoin_price_missing_usd_is_bad_gateway() {
    let server = upstream_returning(
        "/simple/price",
        ResponseTemplate::new(200).set_body_json(json!({"bitcoin": {}})),
    )
    .await;

    let (status, body) = get_json(test_app(&server.uri()), "/api/coins/bitcoin").await;

    assert_bad_gateway(status, &body);
}

#[tokio::test]
async fn test_bitcoin_price_upstream_error_is_bad_gateway() {
    let server = upstream_returning("/simple/price", ResponseTemplate::new(500)).await;

    let (status, body) = get_json(test_app(&server.uri()), "/api/coins/bitcoin").await;

    assert_bad_gateway(status, &body);
    assert_eq!(body["detail"], "Failed to fetch Bitcoin price");
}

#[tokio::test]
async fn test_bitcoin_price_unreachable_upstream_is_bad_gateway() {
    let (status, body) = get_json(test_app(unreachable_upstream()), "/api/coins/bitcoin").await;

    assert_bad_gateway(status, &body);
}

// endregion: --- /api/coins/bitcoin

// region: --- /api/coins

#[tokio::test]
async fn test_coins_preserves_length_and_order() {
    // Arrange
    let server = upstream_returning(
        "/coins/markets",
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": "bitcoin", "name": "Bitcoin", "current_price": 67000.0,
             "price_change_percentage_24h": 2.1, "total_volume": 3.0e10},
            {"id": "ethereum", "name": "Ethereum", "current_price": 3500.0,
             "price_change_percentage_24h": -0.4, "total_volume": 1.2e10},
            {"id": "solana", "name": "Solana", "current_price": 150.0,
             "price_change_percentage_24h": 5.0, "total_volume": 2.0e9}
        ])),
    )
    .await;

    // Act
    let (status, body) = get_json(test_app(&server.uri()), "/api/coins").await;

    // Assert
    assert_eq!(status, StatusCode::OK);
    let coins = body.as_array().expect("coins should be an array");
    let ids: Vec<&str> = coins.iter().filter_map(|c| c["id"].as_str()).collect();
    assert_eq!(ids, vec!["bitcoin", "ethereum", "solana"]);
    assert_eq!(
        coins[1],
        json!({
            "id": "ethereum",
            "name": "Ethereum",
            "price_usd": 3500.0,
            "change_24h": -0.4,
            "volume_24h_usd": 1.2e10
        })
    );
}

#[tokio::test]
async fn test_coins_missing_price_is_null() {
    let server = upstream_returning(
        "/coins/markets",
        ResponseTemplate::new(200).set_body_json(json!([
            {"id": "bitcoin", "name": "Bitcoin", "current_price": 67000.0},
            {"id": "newcoin", "name": "New Coin"}
        ])),
    )
    .await;

    let (status, body) = get_json(test_app(&server.uri()), "/api/coins").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[1]["id"], "newcoin");
    assert!(body[1]["price_usd"].is_null());
    assert!(body[1]["change_24h"].is_null());
}

#[tokio::test]
async fn test_coins_empty_list_is_ok() {
    let server = upstream_returning(
        "/coins/markets",
        ResponseTemplate::new(200).set_body_json(json!([])),
    )
    .await;

    let (status, body) = get_json(test_app(&server.uri()), "/api/coins").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_coins_upstream_error_is_bad_gateway() {
    let server = upstream_returning("/coins/markets", ResponseTemplate::new(500)).await;

    let (status, body) = get_json(test_app(&server.uri()), "/api/coins").await;

    assert_bad_gateway(status, &body);
}

#[tokio::test]
async fn test_coins_non_array_is_bad_gateway() {
    let server = upstream_returning(
        "/coins/markets",
        ResponseTemplate::new(200).set_body_json(json!({"status": {"error_code": 429}})),
    )
    .await;

    let (status, body) = get_json(test_app(&server.uri()), "/api/coins").await;

    assert_bad_gateway(status, &body);
    assert_eq!(body["detail"], "Invalid data received from coin markets endpoint");
}

// endregion: --- /api/coins

// region: --- /api/global

#[tokio::test]
async fn test_global_maps_metrics() {
    let server = upstream_returning(
        "/global",
        ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "total_market_cap": {"usd": 2.5e12},
                "total_volume": {"usd": 9.0e10},
                "market_cap_percentage": {"btc": 51.7, "eth": 16.9}
            }
        })),
    )
    .await;

    let (status, body) = get_json(test_app(&server.uri()), "/api/global").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total_market_cap_usd": 2.5e12,
            "total_volume_24h_usd": 9.0e10,
            "btc_dominance_percent": 51.7
        })
    );
}

#[tokio::test]
async fn test_global_missing_btc_dominance_is_bad_gateway() {
    let server = upstream_returning(
        "/global",
        ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "total_market_cap": {"usd": 2.5e12},
                "total_volume": {"usd": 9.0e10},
                "market_cap_percentage": {"eth": 16.9}
            }
        })),
    )
    .await;

    let (status, body) = get_json(test_app(&server.uri()), "/api/global").await;

    assert_bad_gateway(status, &body);
    assert_eq!(body["detail"], "Invalid data received from global endpoint");
}

// endregion: --- /api/global

// region: --- /bitcoin-price

#[tokio::test]
async fn test_raw_price_returns_upstream_json() {
    let upstream_body = json!({"bitcoin": {"usd": 67012}});
    let server = upstream_returning(
        "/simple/price",
        ResponseTemplate::new(200).set_body_json(upstream_body.clone()),
    )
    .await;

    let (status, body) = get_json(test_app(&server.uri()), "/bitcoin-price").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream_body);
}

#[tokio::test]
async fn test_raw_price_failure_is_ok_with_error_field() {
    let server = upstream_returning("/simple/price", ResponseTemplate::new(503)).await;

    let (status, body) = get_json(test_app(&server.uri()), "/bitcoin-price").await;

    assert_eq!(status, StatusCode::OK);
    let error = body["error"].as_str().expect("error should be a string");
    assert!(!error.is_empty());
}

#[tokio::test]
async fn test_raw_price_does_not_validate() {
    let upstream_body = json!({"bitcoin": {}});
    let server = upstream_returning(
        "/simple/price",
        ResponseTemplate::new(200).set_body_json(upstream_body.clone()),
    )
    .await;

    let (status, body) = get_json(test_app(&server.uri()), "/bitcoin-price").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, upstream_body);
}

// endregion: --- /bitcoin-price
