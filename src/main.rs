//! SENSE Gateway Server
//!
//! Run with: cargo run --bin sense-gateway
//!
//! # Configuration
//!
//! Loaded from `config.toml` (see `--config`), overridable via
//! environment variables:
//! - `SENSE_GATEWAY_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SENSE_GATEWAY_PORT`: Port to listen on (default: 8084)
//! - `SENSE_STATIC_DIR`: Built UI assets directory (default: sense-ui/dist)
//! - `SENSE_BACKEND_URL`: Record backend base URL (default: http://localhost:8000)
//! - `SENSE_LOG_LEVEL` / `SENSE_LOG_FORMAT`: Logging settings
//! - `RUST_LOG`: Overrides the log filter entirely

use clap::Parser;
use sense_market::config::{generate_default_config, Config};
use sense_market::gateway::{serve, AppState};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "sense-gateway", version, about = "SENSE data market gateway")]
struct Cli {
    /// Path to a TOML config file (default: standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(long)]
    port: Option<u16>,

    /// Override the record backend base URL
    #[arg(long)]
    backend_url: Option<String>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    // CLI flags take precedence over file and environment
    if let Some(host) = cli.host {
        config.gateway.host = host;
    }
    if let Some(port) = cli.port {
        config.gateway.port = port;
    }
    if let Some(backend_url) = cli.backend_url {
        config.backend.base_url = backend_url;
    }

    init_tracing(&config);

    tracing::info!("Starting SENSE gateway v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Record backend: {}", config.backend.base_url);
    tracing::info!("Static assets: {}", config.gateway.static_dir);

    let state = AppState::new(config)?;
    serve(state).await?;

    tracing::info!("SENSE gateway stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "sense_market={},sense_gateway={},tower_http=debug",
            config.logging.level, config.logging.level
        ))
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
