//! Robonav main binary
//!
//! Main application entry point for Robonav.

use anyhow::{Context, Result};
use clap::Parser;
use robonav_cli::{conclude, Cli, ConsoleInput, ConsoleReporter, RobonavApp};
use robonav_core::logging::{self, dev_config};
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;

    let logging_config = if cli.verbose {
        dev_config()
    } else {
        config.logging.clone()
    };
    logging::init_logging(&logging_config).context("Failed to initialize logging")?;

    info!(
        version = robonav_core::VERSION,
        config = ?config,
        "Starting Robonav"
    );

    let reporter = ConsoleReporter::new(config.console.colors, config.session.clear_screen);
    let mut input = ConsoleInput::new();
    let app = RobonavApp::new(config);

    let status = conclude(app.run(&mut input, &reporter).await, &reporter);

    info!("Robonav shutting down");
    Ok(status.into())
}
