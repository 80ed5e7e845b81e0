//! # Utilities Library
//!
//! Shared helpers for environment variables and wall-clock time.

pub mod envs;
pub mod time;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or, get_env_parse_or};
pub use time::{format_iso, now_local};
