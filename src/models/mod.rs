//! Domain models and configuration.
//!
//! This module contains all data structures used throughout the application:
//!
//! - Configuration read from the environment at startup
//! - Typed models for chain RPC responses

mod blockchain;
mod config;

pub use blockchain::{KeyedTokenAccount, StakerInfo, TokenAmount};
pub use config::{ApiConfig, AppConfig, ConfigError, EvmConfig, SolanaConfig};
