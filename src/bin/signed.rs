//! Signature-verifying webhook demo server.
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration (`PORT`, default 8080; `GITHUB_WEBHOOK_SECRET`,
//!    required for this variant)
//! 3. Build the router with the shared secret as state
//! 4. Bind and serve; any failure is logged and exits the process non-zero

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use webhook_receiver::config::Config;
use webhook_receiver::handlers::webhook::WebhookState;
use webhook_receiver::routes;

#[tokio::main]
async fn main() {
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

    // This variant refuses to start without a secret; running a verifying
    // receiver that cannot verify would silently accept nothing.
    let secret = config
        .github_webhook_secret
        .context("GITHUB_WEBHOOK_SECRET must be set")?;
    tracing::info!("Configuration loaded");

    let app = routes::signed_app(WebhookState { secret });

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server error")?;

    Ok(())
}
