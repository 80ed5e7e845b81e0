//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! Process-wide state is limited to the tracing subscriber (installed once)
//! and the router built here. Configuration is loaded once and handed to the
//! services; nothing mutable is shared between requests.

// region: --- Imports
use crate::handlers;
use crate::middleware::{log_requests, request_id, stamp_req};
use crate::services::MarketService;
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    routing::get,
    Json, Router,
};
use lib_core::Config;
use lib_upstream::UpstreamClient;
use lib_utils::{get_env_or, get_env};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub market: Arc<MarketService>,
}

impl AppState {
    pub fn new(market: MarketService) -> Self {
        Self {
            market: Arc::new(market),
        }
    }
}

impl axum::extract::FromRef<AppState> for Arc<MarketService> {
    fn from_ref(state: &AppState) -> Self {
        state.market.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8000")
    pub bind_address: String,
    /// Allowed CORS origins
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    /// Read `BIND_ADDRESS` and comma-separated `ALLOWED_ORIGINS`, keeping
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let allowed_origins = get_env("ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Self {
            bind_address: get_env_or("BIND_ADDRESS", &defaults.bind_address),
            allowed_origins,
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Install the global tracing subscriber. The level comes from `LOG_LEVEL`.
pub fn init_tracing() -> anyhow::Result<String> {
    let log_level = get_env_or("LOG_LEVEL", "info").to_lowercase();

    let filter = match log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {
            tracing_subscriber::EnvFilter::new(&log_level)
        }
        _ => tracing_subscriber::EnvFilter::new("info"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {}", e))?;

    Ok(log_level)
}

/// Initialize and start the HTTP server
///
/// # Errors
///
/// This function will return an error if:
/// - The tracing subscriber cannot be installed
/// - Configuration loading or validation fails
/// - The HTTP client cannot be built
/// - Server binding fails
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let log_level = init_tracing()?;
    info!(" MARKET DATA FACADE STARTING");
    info!(" Log level: {}", log_level);

    info!("Loading configuration...");
    let app_config = Config::from_env()?;
    app_config.validate()?;
    info!(
        "Upstream: {} (timeout {}s, {} coins per page)",
        app_config.upstream_base_url,
        app_config.upstream_timeout.as_secs(),
        app_config.coins_per_page
    );

    let upstream = UpstreamClient::new(&app_config)?;
    let state = AppState::new(MarketService::new(upstream, &app_config));

    let app = create_router(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    info!(" SERVER READY: http://{}", config.bind_address);
    log_server_info();

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router with all routes and middleware
pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .route("/bitcoin-price", get(handlers::market::get_bitcoin_price_raw))
        .route("/api/coins/bitcoin", get(handlers::market::get_bitcoin))
        .route("/api/coins", get(handlers::market::get_coins))
        .route("/api/global", get(handlers::market::get_global))
        .fallback(|| async {
            (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" })))
        })
        .with_state(state)
        .layer(axum::middleware::from_fn(log_requests))
        .layer(
            tower_http::trace::TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id(request),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::error!(
                            error = ?error,
                            latency_ms = latency.as_millis(),
                            "[HTTP FAILURE] {:?} after {}ms",
                            error,
                            latency.as_millis()
                        );
                    },
                ),
        )
        // Stamping runs first so the span and logs above can see the ID
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(cors)
}

/// Log server information
fn log_server_info() {
    info!(" MARKET DATA:");
    info!("   • GET  /bitcoin-price");
    info!("   • GET  /api/coins/bitcoin");
    info!("   • GET  /api/coins");
    info!("   • GET  /api/global");
    info!(" HEALTH:");
    info!("   • GET  /");
    info!("   • GET  /health");
}
// endregion: --- Server Setup
