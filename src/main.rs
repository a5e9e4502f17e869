//! # movie-api binary
//!
//! CLI entry point: loads configuration, connects the database pools, and
//! serves the HTTP API until a shutdown signal arrives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::Notify;
use tracing::{info, warn};

use movie_api::config::AppConfig;
use movie_api::database::DatabasePools;
use movie_api::web::{create_app, state::AppState};

#[derive(Parser, Debug)]
#[command(name = "movie-api")]
#[command(about = "RESTful movie catalog service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Configuration directory (contains {environment}.yaml or app.yaml)
    #[arg(short, long, default_value = "config")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("loading configuration from {}", cli.config))?;

    movie_api::logging::init_tracing(&config.log.level);

    match cli.command {
        Commands::Serve => serve(config).await,
    }
}

async fn serve(config: AppConfig) -> Result<()> {
    let pools = DatabasePools::connect(&config.database)
        .await
        .context("connecting database pools")?;

    let port = config.app.port;
    let graceful_timeout = Duration::from_secs(config.app.graceful_timeout_secs);

    let state = AppState::new(config, pools);
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, "movie-api listening");

    let shutdown = Arc::new(Notify::new());
    let shutdown_trigger = Arc::clone(&shutdown);

    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown_trigger.notified().await })
            .await
    });

    wait_for_shutdown_signal().await;
    shutdown.notify_one();

    // In-flight requests get the configured grace period, then we stop
    // waiting and let the process exit.
    match tokio::time::timeout(graceful_timeout, server).await {
        Ok(joined) => joined.context("server task panicked")?.context("http server error")?,
        Err(_) => warn!(
            timeout_secs = graceful_timeout.as_secs(),
            "graceful shutdown timed out"
        ),
    }

    info!("shutdown complete");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            match result {
                Ok(()) => info!("received ctrl-c, shutting down"),
                Err(e) => warn!(error = %e, "failed to listen for ctrl-c"),
            }
        }
        _ = wait_for_sigterm() => {
            info!("received SIGTERM, shutting down");
        }
    }
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!(error = %e, "failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    std::future::pending::<()>().await;
}
