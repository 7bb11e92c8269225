//! HTTP handlers for the auth service.
//!
//! The auth service currently exposes only liveness endpoints; session
//! issuance is handled elsewhere in the platform.

use axum::extract::Json;
use serde::Serialize;

/// Health probe response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Root endpoint response body.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub service: &'static str,
    pub status: &'static str,
}

/// GET /health and GET /auth/health - liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// GET / - service identification
pub async fn root() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        service: "auth",
        status: "running",
    })
}
