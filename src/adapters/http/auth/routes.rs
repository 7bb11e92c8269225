//! Axum router for the auth service.

use axum::routing::get;
use axum::Router;

use super::handlers::{health, root};
use crate::adapters::http::middleware::hsts_header;

/// Create the auth service router.
///
/// # Routes
/// - `GET /` - service identification
/// - `GET /health` - liveness probe (load balancer)
/// - `GET /auth/health` - liveness probe (path-routed ingress alias)
///
/// Every response carries the HSTS header.
pub fn auth_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/auth/health", get(health))
        .layer(axum::middleware::from_fn(hsts_header))
}
