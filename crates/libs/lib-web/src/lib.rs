//! # Web Library
//!
//! HTTP handlers, middleware, the market service, and server startup.

pub mod handlers;
pub mod middleware;
pub mod server;
pub mod services;

pub use server::{create_router, start_server, AppState, ServerConfig};
