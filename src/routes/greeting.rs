//! Greeting page handler.
//!
//! Reports the pod hostname together with the version and environment the
//! service was started with, which makes rollouts and load balancing visible
//! when the service runs as a multi-replica deployment.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::instrument;

use crate::state::AppState;

/// Fixed greeting returned by `GET /`.
pub const GREETING_MESSAGE: &str = "Hello from Kubernetes!";

/// Substitute hostname when the OS lookup fails or is not valid UTF-8.
const UNKNOWN_HOSTNAME: &str = "unknown";

/// Response body for `GET /`.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: &'static str,
    pub hostname: String,
    pub version: String,
    pub environment: String,
}

/// Greeting page handler.
///
/// The hostname is resolved from the OS on every request; version and
/// environment come from the startup configuration.
#[instrument(name = "greeting::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        message: GREETING_MESSAGE,
        hostname: resolve_hostname(),
        version: state.config.version.clone(),
        environment: state.config.environment.clone(),
    })
}

/// Resolve the host's network name.
///
/// Never fails the request: lookup errors and non-UTF-8 names degrade to a
/// fixed placeholder.
fn resolve_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string())
}
