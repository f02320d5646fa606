//! Service configuration.
//!
//! All configuration is read from environment variables exactly once at
//! startup. A missing required value or an unparseable value is a fatal
//! configuration error; the process must not begin serving traffic.

mod app_config;
mod error;

pub use app_config::{ApiConfig, AppConfig, EvmConfig, SolanaConfig};
pub use error::ConfigError;
