// src/signal.rs

//! Provides signal handling for graceful shutdown.

/// Resolves once Ctrl+C (SIGINT) is received.
///
/// Passed to `axum::serve(..).with_graceful_shutdown` so in-flight requests
/// finish before the process exits. If the handler cannot be installed the
/// future never resolves and the server runs until killed.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Ctrl+C signal received, attempting graceful shutdown.");
}
