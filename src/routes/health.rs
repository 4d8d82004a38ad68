//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK with the configured body when
//! the process is running. The route accepts any HTTP method and ignores the
//! query string, headers and request body.

use axum::extract::State;
use axum::http::{header::CONTENT_TYPE, StatusCode};
use axum::response::IntoResponse;

use crate::state::AppState;

/// Health check handler.
///
/// This is a liveness probe: it only shows that the process can respond to
/// HTTP. It performs no I/O and cannot fail.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.health_body,
    )
}
