//! HTTP route handlers and router construction.
//!
//! Routes are collected in a [`RouteTable`] before the Axum router is built, so
//! a path bound twice is reported as a startup error instead of one binding
//! silently shadowing the other.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;

use axum::{
    middleware,
    routing::{any, MethodRouter},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HEALTH;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Route registration error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route '{0}' is registered more than once")]
    Duplicate(String),

    #[error("Invalid route path '{0}': must start with '/' and contain no parameters")]
    InvalidPath(String),
}

/// Ordered set of route registrations with unique paths.
pub struct RouteTable<S = ()> {
    routes: Vec<(String, MethodRouter<S>)>,
}

impl<S> Default for RouteTable<S> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

impl<S> RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for a literal path.
    ///
    /// Fails if the path is already present or is not a literal absolute path.
    pub fn register(
        &mut self,
        path: impl Into<String>,
        handler: MethodRouter<S>,
    ) -> Result<(), RouteError> {
        let path = path.into();

        if !is_literal_path(&path) {
            return Err(RouteError::InvalidPath(path));
        }

        if self.contains(&path) {
            tracing::error!(path = %path, "Duplicate route registration");
            return Err(RouteError::Duplicate(path));
        }

        tracing::debug!(path = %path, "Registered route");
        self.routes.push((path, handler));
        Ok(())
    }

    fn contains(&self, path: &str) -> bool {
        self.routes.iter().any(|(p, _)| p == path)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.routes.len()
    }

    /// Build an Axum router containing every registered route.
    pub fn into_router(self) -> Router<S> {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, (path, handler)| {
                router.route(&path, handler)
            })
    }
}

/// An absolute path with no capture or wildcard syntax.
///
/// Segments starting with `:` are rejected too, since axum refuses them at
/// route insertion.
fn is_literal_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.contains(['{', '}', '*'])
        && !path.split('/').any(|segment| segment.starts_with(':'))
}

/// Creates the Axum router with the health route and request tracing.
pub fn create_router(state: AppState) -> Result<Router, RouteError> {
    let mut table = RouteTable::new();

    // Health check - no caching, always fresh for liveness probes
    table.register(
        state.config.health.path.clone(),
        any(health::health).layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        )),
    )?;

    Ok(table
        .into_router()
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn router_with(config: AppConfig) -> Router {
        create_router(AppState::new(config)).unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let mut table: RouteTable = RouteTable::new();
        table.register("/health", any(|| async { "first" })).unwrap();

        let err = table
            .register("/health", any(|| async { "second" }))
            .unwrap_err();
        assert_eq!(err, RouteError::Duplicate("/health".to_string()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_distinct_routes_accepted() {
        let mut table: RouteTable = RouteTable::new();
        table.register("/health", any(|| async { "ok" })).unwrap();
        table.register("/healthz", any(|| async { "ok" })).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("/healthz"));
    }

    #[test]
    fn test_invalid_paths_rejected() {
        let mut table: RouteTable = RouteTable::new();
        for path in ["health", "/health/{id}", "/static/*rest", "/:id", "/probe/:name", ""] {
            assert_eq!(
                table.register(path, any(|| async { "ok" })),
                Err(RouteError::InvalidPath(path.to_string()))
            );
        }
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_colon_inside_segment_is_literal() {
        let mut table: RouteTable = RouteTable::new();
        table.register("/health:live", any(|| async { "ok" })).unwrap();
        let _router = table.into_router();
    }

    #[test]
    fn test_colon_prefixed_health_path_is_an_error_not_a_panic() {
        let config = AppConfig::from_toml_str("[health]\npath = \"/:health\"\n").unwrap();
        assert_eq!(
            create_router(AppState::new(config)).err(),
            Some(RouteError::InvalidPath("/:health".to_string()))
        );
    }

    #[test]
    fn test_create_router_rejects_parameterized_health_path() {
        let mut config = AppConfig::default();
        config.health.path = "/health/{probe}".to_string();
        assert!(matches!(
            create_router(AppState::new(config)),
            Err(RouteError::InvalidPath(_))
        ));
    }

    #[tokio::test]
    async fn test_get_health() {
        let response = router_with(AppConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");
        assert_eq!(body_string(response).await, "Hello World!");
    }

    #[tokio::test]
    async fn test_any_method_gets_same_response() {
        let app = router_with(AppConfig::default());

        for method in [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ] {
            let request = Request::builder()
                .method(method.clone())
                .uri("/health?verbose=1")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"check":"deep"}"#))
                .unwrap();

            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "method {}", method);
            assert_eq!(body_string(response).await, "Hello World!");
        }
    }

    #[tokio::test]
    async fn test_configured_body_returned_exactly() {
        let body = "서버가 정상 작동합니다!\n This is a health check endpoint.\n  The application is running.";
        let mut config = AppConfig::default();
        config.health.body = body.to_string();

        let response = router_with(config)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, body);
    }

    #[tokio::test]
    async fn test_configured_path() {
        let mut config = AppConfig::default();
        config.health.path = "/livez".to_string();
        let app = router_with(config);

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unmapped_path_is_not_found() {
        let response = router_with(AppConfig::default())
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
