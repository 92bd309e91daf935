//! ecs-demo: a deployment smoke-test HTTP service.
//!
//! This is the application entry point. It parses arguments, loads configuration
//! from a TOML file, initializes tracing, sets up the Axum router and starts the
//! HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecs_demo::config::{AppConfig, LogFormat, DEFAULT_LOG_FILTER};
use ecs_demo::http::start_server;
use ecs_demo::routes::create_router;

/// ecs-demo: fixed-response HTTP service for validating deployments
#[derive(Parser, Debug)]
#[command(name = "ecs-demo", version, about)]
struct Args {
    /// Path to configuration file (default: config/default.toml if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Log level filter (e.g., "ecs_demo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration first, the log format lives in it
    let config = AppConfig::resolve(args.config.as_deref())?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
