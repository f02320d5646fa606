//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: directory for log files; default is "logs/"

pub mod error;

use std::env;

use tracing::info;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Creates the shared event format used for both stdout and file output
fn create_log_format(with_ansi: bool) -> fmt::format::Format<fmt::format::Compact> {
	fmt::format()
		.with_level(true)
		.with_target(true)
		.with_thread_ids(false)
		.with_thread_names(false)
		.with_ansi(with_ansi)
		.compact()
}

/// Sets up logging by reading configuration from environment variables.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
	let log_mode = env::var("LOG_MODE").unwrap_or_else(|_| "stdout".to_string());
	let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

	let level_filter = match log_level.to_lowercase().as_str() {
		"trace" => tracing::Level::TRACE,
		"debug" => tracing::Level::DEBUG,
		"info" => tracing::Level::INFO,
		"warn" => tracing::Level::WARN,
		"error" => tracing::Level::ERROR,
		_ => tracing::Level::INFO,
	};

	let subscriber = tracing_subscriber::registry().with(EnvFilter::new(level_filter.to_string()));

	if log_mode.to_lowercase() == "file" {
		let log_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "logs/".to_string());
		let log_dir = log_dir.trim_end_matches('/').to_string();

		std::fs::create_dir_all(&log_dir)?;

		// Daily rolling keeps a bounded per-file size without custom rotation logic
		let file_appender = tracing_appender::rolling::daily(&log_dir, "query-service.log");

		subscriber
			.with(
				fmt::layer()
					.event_format(create_log_format(false))
					.with_writer(file_appender),
			)
			.init();
	} else {
		subscriber
			.with(fmt::layer().event_format(create_log_format(true)))
			.init();
	}

	info!("Logging is successfully configured (mode: {})", log_mode);
	Ok(())
}
