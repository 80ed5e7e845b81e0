//! # HTTP Request Handlers
//!
//! Axum handlers organized by feature domain. Handlers delegate to
//! [`crate::services`] and only translate outcomes into HTTP responses.
//!
//! ## Handler Modules
//!
//! - **[`health`]**: liveness endpoints, never call upstream
//!   - `GET /` - Greeting
//!   - `GET /health` - `{"status": "ok"}`
//!
//! - **[`market`]**: upstream-backed market data
//!   - `GET /bitcoin-price` - Raw upstream price JSON (soft errors)
//!   - `GET /api/coins/bitcoin` - Normalized Bitcoin price
//!   - `GET /api/coins` - Top coins by market cap
//!   - `GET /api/global` - Global market metrics
//!
//! ## Error Handling
//!
//! Market handlers return `Result<Json<T>, AppError>`. Every upstream failure
//! becomes `502 Bad Gateway` with `{"detail": "..."}`; `/bitcoin-price` is the
//! one exception and reports failures as `200 {"error": "..."}`.

pub mod health;
pub mod market;

#[cfg(test)]
mod tests;
