//! PhishGuard
//!
//! Scores text messages for phishing risk with keyword, URL, and
//! statistical-model signals, served over a small web UI and JSON API.

use anyhow::Result;
use clap::Parser;
use phishguard_classifiers::MessageScorer;
use phishguard_server::{create_router, telemetry, AppState, Cli, ServerConfig};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    telemetry::init_tracing(cli.verbose);

    info!("Starting PhishGuard");

    // Load configuration
    let config = ServerConfig::load(&cli.config, &cli)?;
    info!("Configuration loaded successfully");
    info!(
        "Risk thresholds: medium >= {}, high >= {}",
        config.risk.medium, config.risk.high
    );
    info!(
        "URL probing: {} (timeout {} ms)",
        if config.scorer.probe.enabled { "enabled" } else { "disabled" },
        config.scorer.probe.timeout_ms
    );

    // Initialize metrics
    let metrics_handle = telemetry::init_metrics()?;

    // Train the model; the server cannot run without it
    info!("Training phishing model...");
    let scorer = MessageScorer::from_config(&config.scorer)
        .map_err(|e| anyhow::anyhow!("Failed to initialize scorer: {}", e))?;

    let state = AppState::new(scorer, config.risk).with_metrics(metrics_handle);
    let app = create_router(state, config.server.max_body_bytes);

    let addr: SocketAddr = config.bind_address().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("PhishGuard listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Listen for shutdown signals (SIGTERM, SIGINT)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    warn!("Shutdown signal received, stopping server...");
}
