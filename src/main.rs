//! Blockchain query service entry point.
//!
//! This binary starts the read-only query service: it loads configuration
//! from the environment, initializes one client per chain, and serves the
//! HTTP query routes until interrupted.
//!
//! # Flow
//! 1. Applies CLI options to the environment and sets up logging
//! 2. Reads and validates configuration (fatal on missing required values)
//! 3. Initializes the EVM and Solana clients, probing each endpoint once
//! 4. Serves the query routes and metrics endpoint
//! 5. Shuts down gracefully on Ctrl+C

pub mod api;
pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;

use crate::{
	api::create_api_server,
	bootstrap::{initialize_clients, Result},
	models::AppConfig,
	utils::logging::setup_logging,
};

use clap::Parser;
use dotenvy::dotenv_override;
use std::env::{set_var, var};
use tracing::{error, info};

#[derive(Parser)]
#[command(
	name = "chain-query-service",
	about = "A read-only query service that forwards address and token queries to Ethereum (Sepolia) and Solana RPC endpoints.",
	version
)]
struct Cli {
	/// Write logs to file instead of stdout
	#[arg(long)]
	log_file: bool,

	/// Set log level (trace, debug, info, warn, error)
	#[arg(long, value_name = "LEVEL")]
	log_level: Option<String>,

	/// Path to store log files (default: logs/)
	#[arg(long, value_name = "PATH")]
	log_path: Option<String>,

	/// Address to bind the API server to (default: HOST:PORT from environment)
	#[arg(long, value_name = "HOST:PORT")]
	address: Option<String>,

	/// Validate configuration without starting the service
	#[arg(long)]
	check: bool,
}

impl Cli {
	/// Apply CLI options to environment variables, overriding any existing values
	fn apply_to_env(&self) {
		// Reload environment variables from .env file
		// Override any existing environment variables
		dotenv_override().ok();

		// Log file mode - override if CLI flag is set
		if self.log_file {
			set_var("LOG_MODE", "file");
		}

		// Set log level from RUST_LOG if it exists
		if let Ok(level) = var("RUST_LOG") {
			set_var("LOG_LEVEL", level);
		}

		// Log level - override if CLI flag is set
		if let Some(level) = &self.log_level {
			set_var("LOG_LEVEL", level);
			set_var("RUST_LOG", level);
		}

		// Log path - override if CLI flag is set
		if let Some(path) = &self.log_path {
			set_var("LOG_DATA_DIR", path);
		}
	}
}

/// Main entry point for the blockchain query service.
///
/// # Errors
/// Returns an error if configuration is invalid, an RPC endpoint is
/// unreachable, or the server fails to bind.
#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	// Apply CLI options to environment
	cli.apply_to_env();

	// Setup logging to stdout
	setup_logging().unwrap_or_else(|e| {
		error!("Failed to setup logging: {}", e);
	});

	// Configuration must be complete before anything binds or connects
	let config = AppConfig::from_env()
		.map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

	// If --check flag is provided, only validate configuration and exit
	if cli.check {
		info!("Configuration validated successfully");
		return Ok(());
	}

	let clients = initialize_clients(&config).await?;

	let bind_address = cli
		.address
		.unwrap_or_else(|| config.api.bind_address());

	let server = create_api_server(bind_address, clients.staking, clients.token)?;

	info!("Service started. Press Ctrl+C to shutdown");

	let ctrl_c = tokio::signal::ctrl_c();

	tokio::select! {
		result = server => {
			if let Err(e) = result {
				error!("API server error: {}", e);
			}
			info!("API server stopped");
		}
		result = ctrl_c => {
			if let Err(e) = result {
				error!("Error waiting for Ctrl+C: {}", e);
			}
			info!("Shutdown signal received, stopping service...");
		}
	}

	info!("Shutdown complete");
	Ok(())
}
