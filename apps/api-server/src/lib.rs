//! # Blog API Server
//!
//! HTTP layer of the blog service: CRUD handlers for `/posts`, the
//! router, configuration, telemetry, and start/stop of the listener.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;
