//! HTTP server module with optional TLS.
//!
//! This module provides the listener for the service in two modes:
//! - **None (default)**: Plain HTTP, for development or behind a reverse proxy
//! - **Manual**: HTTPS with user-provided certificate and key files
//!
//! The server includes:
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Certificate hot-reload via SIGHUP (manual mode)

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
