//! # Core Library
//!
//! Configuration, the application error taxonomy, and the stable output schema.

pub mod config;
pub mod dto;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
