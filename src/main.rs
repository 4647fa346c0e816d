//! hello-kubernetes: a minimal HTTP demo service for container orchestration.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from environment variables, sets up the Axum router with all
//! routes, and starts the HTTP server. Startup failures (an unparseable PORT,
//! an unbindable address) propagate out of `main` so the process exits
//! non-zero with a diagnostic instead of running in a broken state.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_kubernetes::config::{AppConfig, DEFAULT_LOG_FILTER};
use hello_kubernetes::http::start_server;
use hello_kubernetes::routes::create_router;
use hello_kubernetes::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing with priority: env > default
    let log_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration once; handlers only see the resulting struct
    let config = AppConfig::from_env()?;
    tracing::info!(
        port = config.port,
        version = %config.version,
        environment = %config.environment,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server; blocks until a shutdown signal drains the listener
    start_server(app, &config).await?;

    Ok(())
}
