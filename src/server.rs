//! HTTP server initialization and runtime setup.
//!
//! Builds the engine, wires shared state into the router, and runs the Axum
//! server until shutdown.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The shortening engine (mapping table + admission limiter)
/// - The Axum router with shared state
/// - TCP listener with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let shortener = Arc::new(ShortenerService::new(
        &config.base_url,
        config.max_concurrent_requests,
    ));
    tracing::info!(
        "Engine ready: base URL {}, {} admission permit(s)",
        shortener.base_url(),
        shortener.permit_limit()
    );

    let state = AppState::new(shortener);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
