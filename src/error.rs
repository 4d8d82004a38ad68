//! Startup errors.
//!
//! The health handler itself cannot fail, so the only errors in the service
//! are those that stop it from starting. Each one aborts the process.

use crate::config::ConfigError;
use crate::http::ServerError;
use crate::routes::RouteError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
