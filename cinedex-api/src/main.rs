//! cinedex-api - Movie catalog service
//!
//! Loads the movie dataset once at startup and serves read-only query,
//! analytics and recommendation endpoints plus a small dashboard.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cinedex_api::{build_router, cors_layer, AppState};
use cinedex_common::config::{ConfigOverrides, ServiceConfig};
use cinedex_common::Catalog;
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for cinedex-api
#[derive(Parser, Debug)]
#[command(name = "cinedex-api")]
#[command(about = "Read-only movie catalog service")]
#[command(version)]
struct Args {
    /// Movie dataset (CSV)
    #[arg(short, long, env = "CINEDEX_DATA_FILE")]
    data_file: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "CINEDEX_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CINEDEX_PORT")]
    port: Option<u16>,

    /// TOML configuration file
    #[arg(short, long, env = "CINEDEX_CONFIG")]
    config: Option<PathBuf>,
}

impl From<Args> for ConfigOverrides {
    fn from(args: Args) -> Self {
        Self {
            data_file: args.data_file,
            host: args.host,
            port: args.port,
            config_file: args.config,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG wins; otherwise start at info and apply the configured level
    // once the TOML file has been read
    let env_filter = EnvFilter::try_from_default_env().ok();
    let filter_from_env = env_filter.is_some();
    let (filter, filter_handle) = reload::Layer::new(
        env_filter.unwrap_or_else(|| EnvFilter::new(default_directives("info"))),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting Cinedex catalog service (cinedex-api) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = ServiceConfig::resolve(args.into());
    if !filter_from_env {
        if let Err(e) = filter_handle.reload(EnvFilter::new(default_directives(&config.log_level))) {
            warn!("Failed to apply log level '{}': {}", config.log_level, e);
        }
    }

    info!("Dataset path: {}", config.data_file.display());

    // One-time load; an unreadable dataset still starts the service
    let catalog = Catalog::load(&config.data_file);
    if catalog.is_empty() {
        warn!("Catalog is empty, all queries will return no results");
    } else {
        info!("✓ Catalog ready with {} movies", catalog.len());
    }

    let state = AppState::new(catalog);
    let app = build_router(state).layer(cors_layer(&config.cors_origins));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("cinedex-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Filter directives for our crates and the HTTP trace layer
fn default_directives(level: &str) -> String {
    format!("cinedex_api={0},cinedex_common={0},tower_http={0}", level)
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
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

    info!("Shutdown signal received");
}
