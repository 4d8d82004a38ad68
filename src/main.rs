//! Heartbeat: a minimal liveness-check HTTP service.
//!
//! This is the application entry point. It loads configuration from a TOML
//! file, initializes tracing, builds the router and starts the HTTP server.

use clap::Parser;

use heartbeat::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, LogFormat};
use heartbeat::http::start_server;
use heartbeat::logging::init_tracing;
use heartbeat::{create_router, AppError, AppState};

/// Heartbeat: a minimal liveness-check HTTP service
#[derive(Parser, Debug)]
#[command(name = "heartbeat", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "heartbeat=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Configuration comes first so the log format can be honored
    let config = AppConfig::load(&args.config)?;

    // Log filter priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(
        &log_filter,
        config.logging.log_format().unwrap_or(LogFormat::Text),
    )?;

    tracing::info!(
        config = %args.config,
        path = %config.health.path,
        body_bytes = config.health.body.len(),
        "Loaded configuration"
    );

    let app = create_router(AppState::new(config.clone()))?;

    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
