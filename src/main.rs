//! Vitaltrack - vital-sign tracking and classification service
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (data in ./vitaltrack-data, listening on :8080)
//! cargo run --release
//!
//! # Run against a specific config and address
//! cargo run --release -- --config deploy/vitaltrack.toml --addr 127.0.0.1:9000
//! ```
//!
//! # Environment Variables
//!
//! - `VITALTRACK_CONFIG`: Path to the TOML config file
//! - `VITALTRACK_CORS_ORIGINS`: Comma-separated allowed CORS origins
//! - `RUST_LOG`: Logging level (default: info)
//! - `RESET_DB`: Set to "true" to wipe all persisted data on startup

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use vitaltrack::api::{create_app, DashboardState};
use vitaltrack::background;
use vitaltrack::config::{self, AppConfig};
use vitaltrack::storage::ReadingStore;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "vitaltrack")]
#[command(about = "Vital signs tracking and classification service")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to a TOML config file (bypasses the normal search order)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the database directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Wipe all persisted readings and settings on startup.
    /// WARNING: This is destructive and cannot be undone!
    /// Can also be set via RESET_DB=true environment variable.
    #[arg(long, env = "RESET_DB")]
    reset_db: bool,
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    let mut app_config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::load(),
    };
    if let Some(addr) = args.addr {
        app_config.server.addr = addr;
    }
    if let Some(data_dir) = args.data_dir {
        app_config.storage.data_dir = data_dir;
    }
    config::init(app_config);
    let cfg = config::get();

    if args.reset_db && cfg.storage.data_dir.exists() {
        warn!(dir = %cfg.storage.data_dir.display(), "RESET_DB set — wiping persisted data");
        std::fs::remove_dir_all(&cfg.storage.data_dir)
            .context("Failed to reset database directory")?;
    }

    let store = ReadingStore::open(&cfg.storage.data_dir).with_context(|| {
        format!(
            "Failed to open reading store at {}",
            cfg.storage.data_dir.display()
        )
    })?;
    info!(dir = %cfg.storage.data_dir.display(), "Reading store opened");

    let cancel_token = CancellationToken::new();
    let sweeper = background::spawn_retention_sweeper(
        store.clone(),
        cfg.storage.retention_sweep_interval_secs,
        cancel_token.clone(),
    );

    let app = create_app(DashboardState::new(store.clone()));
    let listener = tokio::net::TcpListener::bind(&cfg.server.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", cfg.server.addr))?;
    info!("HTTP server listening on {}", cfg.server.addr);
    info!("Dashboard API available at http://{}/api/v1", cfg.server.addr);

    let shutdown_token = cancel_token.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            shutdown_token.cancel();
        })
        .await
        .context("HTTP server error")?;

    // Server is down; stop background tasks and flush the store.
    cancel_token.cancel();
    if let Err(e) = sweeper.await {
        error!(error = %e, "Retention sweeper did not shut down cleanly");
    }
    store.flush().context("Final flush failed")?;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received ctrl-c, shutting down"),
        Err(e) => error!(error = %e, "Failed to listen for ctrl-c"),
    }
}
