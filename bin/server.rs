// Receipt Points - Web Server
// REST API with Axum

use anyhow::{Context, Result};
use clap::Parser;
use receipt_points::api::{router, AppState};
use receipt_points::{logging, ServerConfig, VERSION};
use tracing::info;

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    logging::init(logging::DEFAULT_FILTER);

    // Create shared state
    let state = AppState::default();
    let app = router(state);

    // Start server
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!(version = VERSION, %addr, "receipt server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    info!("receipt server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
