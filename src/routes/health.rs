//! Health check endpoints for container orchestration.
//!
//! Provides liveness and readiness probes that return 200 OK when the process
//! is running. Used by Kubernetes, ECS, systemd, and load balancers: the
//! liveness probe gates restarts, the readiness probe gates load balancing.
//! With no dependencies to wait for, readiness follows liveness directly.

use axum::Json;
use serde::Serialize;

/// Probe response body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// Liveness probe handler.
///
/// Returns `{"status":"healthy"}` to indicate the process is running. This
/// only checks that the process can respond to HTTP.
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse { status: "healthy" })
}

/// Readiness probe handler.
///
/// Returns `{"status":"ready"}` to indicate the service can accept traffic.
pub async fn ready() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ready" })
}
