//! HTTP route handlers for the demo service.
//!
//! Three fixed routes: the greeting page, a liveness probe, and a readiness
//! probe. Every handler ignores the request body, query, and headers, so no
//! extractors beyond application state are involved. Unknown paths fall
//! through to the router's default 404 response.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod greeting;
pub mod health;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(greeting::index))
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
