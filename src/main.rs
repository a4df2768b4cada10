//! DormHub: dormitory and tenant management client
//!
//! Main entry point: loads configuration, initializes logging, and runs the
//! requested command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use dormhub_cli::Cli;
use dormhub_core::config::AppConfig;
use dormhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    tracing::debug!("Starting DormHub v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli.execute(config).await {
        eprintln!("Error: {}", e.message);
        if let Some(details) = &e.details {
            eprintln!("  {}", details);
        }
        tracing::debug!(kind = %e.kind, "Command failed");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let env = std::env::var("DORMHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let mut config = AppConfig::load(&cli.config, &env)?;
    cli.apply_overrides(&mut config);

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
