//! Shared application state for request handlers.

use std::sync::Arc;

use axum::body::Bytes;

use crate::config::AppConfig;

/// Shared application state, cloneable across handlers.
///
/// The health body is materialized once from configuration and shared as
/// reference-counted bytes, so each response is a cheap clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub health_body: Bytes,
}

impl AppState {
    /// Creates a new application state from the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let health_body = Bytes::from(config.health.body.clone());
        Self {
            config: Arc::new(config),
            health_body,
        }
    }
}
