//! # Upstream Library
//!
//! The fetch-and-normalize pipeline for the upstream market-data provider:
//!
//! ```text
//! UpstreamClient (client) → ResponseValidator (validator) → FieldMapper (mapper)
//! ```
//!
//! Each stage is stateless. Failures are returned as values:
//! [`TransportFailure`] from the client and [`InvalidResult`] from the validator.

pub mod client;
pub mod endpoints;
pub mod mapper;
pub mod types;
pub mod validator;

pub use client::UpstreamClient;
pub use types::{RawResult, TransportFailure};
pub use validator::{EntityKind, InvalidResult, ValidCoin};
