//! Plain webhook demo server.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables (`PORT`, default 8080)
//! 3. Build the router
//! 4. Bind and serve; any failure is logged and exits the process non-zero

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use webhook_receiver::config::Config;
use webhook_receiver::routes;

#[tokio::main]
async fn main() {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = run().await {
        tracing::error!(error = format!("{err:#}"), "fatal error");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let app = routes::plain_app();

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio.
    // Connect-info is attached so the logging middleware can see client addresses.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
