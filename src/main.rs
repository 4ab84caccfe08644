// instantseek2api - OpenAI-compatible chat completions gateway for the InstantSeek API

use anyhow::Result;
use clap::Parser;
use instantseek2api::cli::Args;
use instantseek2api::config::AppConfig;
use instantseek2api::instantseek::InstantSeekClient;
use instantseek2api::server::create_router;
use instantseek2api::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let mut config = AppConfig::load()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting instantseek2api v{}", env!("CARGO_PKG_VERSION"));

    if config.auth.expected_token().is_some() {
        info!("Bearer-token authentication enabled");
    } else {
        info!("No auth token configured, running with open access");
    }

    // Phase 3: Build upstream HTTP client
    let client = InstantSeekClient::new(&config.upstream)?;
    info!("Upstream endpoint: {}", config.upstream.url);

    // Phase 4: Build and start HTTP server
    let app = create_router(config.clone(), client);
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 5: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
