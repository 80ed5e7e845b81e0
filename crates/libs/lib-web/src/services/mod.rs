//! # Services Layer
//!
//! Business logic between the HTTP handlers and the upstream pipeline:
//!
//! ```text
//! Handlers (HTTP) → Services → UpstreamClient → ResponseValidator → FieldMapper
//! ```
//!
//! Services return `Result<T, AppError>`; pipeline failures are converted into
//! [`AppError`](lib_core::AppError) variants carrying a route-specific detail.

pub mod market;

pub use market::MarketService;
