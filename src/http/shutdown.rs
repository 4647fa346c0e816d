//! Graceful shutdown signal handling.
//!
//! Orchestrators send SIGTERM before killing a pod; handling it lets in-flight
//! requests finish during rolling restarts. Ctrl+C covers interactive runs.

/// Completes when SIGTERM or Ctrl+C is received.
///
/// Passed to the server as its graceful-shutdown trigger: once this resolves,
/// the listener stops accepting new connections and existing connections are
/// drained.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
