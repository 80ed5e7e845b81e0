//! # Upstream Types
//!
//! Outcome of a single outbound call.

use serde_json::Value;
use thiserror::Error;

/// Result of [`UpstreamClient::fetch`](crate::UpstreamClient::fetch): the parsed
/// JSON body or the reason the call failed.
pub type RawResult = Result<Value, TransportFailure>;

/// Transport-level failure of an upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportFailure {
    /// The provider answered with a non-2xx status.
    #[error("bad_status: upstream returned HTTP {code}")]
    BadStatus { code: u16 },

    /// Connection error, timeout, or any other error before a response arrived.
    #[error("network_error: {0}")]
    Network(String),

    /// A 2xx response whose body was not valid JSON.
    #[error("decode_error: {0}")]
    Decode(String),
}

impl TransportFailure {
    /// Short machine-readable reason, used in logs.
    pub fn reason(&self) -> &'static str {
        match self {
            TransportFailure::BadStatus { .. } => "bad_status",
            TransportFailure::Network(_) => "network_error",
            TransportFailure::Decode(_) => "decode_error",
        }
    }
}
