//! Heartbeat: a minimal liveness-check HTTP service.
//!
//! Serves a single route (`/health` by default) that answers every request,
//! whatever its method, with `200 OK` and a fixed plain-text body read from
//! configuration at startup.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
