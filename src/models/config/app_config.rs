//! Application configuration loaded from the environment.
//!
//! Environment variables used:
//! - SEPOLIA_RPC_URL: Sepolia JSON-RPC endpoint (required)
//! - STAKING_CONTRACT_ADDRESS: staking contract address (default: documented deployment)
//! - SOLANA_RPC_URL: Solana JSON-RPC endpoint (default: public mainnet)
//! - SPL_TOKEN_MINT_ADDRESS: SPL mint the service reports on (default: documented mint)
//! - HOST / PORT: listening address (default: 0.0.0.0:3000)

use std::{collections::HashMap, env};

use alloy::primitives::Address;
use url::Url;

use crate::{models::config::error::ConfigError, utils::is_valid_pubkey};

/// Staking contract deployment used when STAKING_CONTRACT_ADDRESS is not set
pub const DEFAULT_STAKING_CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// Public RPC endpoint used when SOLANA_RPC_URL is not set
pub const DEFAULT_SOLANA_RPC_URL: &str = "https://api.mainnet-beta.solana.com";

/// SPL token mint used when SPL_TOKEN_MINT_ADDRESS is not set
pub const DEFAULT_SPL_TOKEN_MINT_ADDRESS: &str = "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// HTTP listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
	pub host: String,
	pub port: u16,
}

impl ApiConfig {
	/// Returns the `host:port` string the server binds to
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

/// EVM (Sepolia) query configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvmConfig {
	/// JSON-RPC endpoint URL
	pub rpc_url: String,
	/// Address of the staking contract read by `getStakerInfo`
	pub staking_contract: Address,
}

/// Solana query configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolanaConfig {
	/// JSON-RPC endpoint URL
	pub rpc_url: String,
	/// Base58 mint address of the SPL token the service reports on
	pub mint_address: String,
}

/// Immutable service configuration, populated once at startup.
///
/// Construction fails fast: a missing required variable or a malformed value
/// is returned as a [`ConfigError`] before the server ever binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
	pub api: ApiConfig,
	pub evm: EvmConfig,
	pub solana: SolanaConfig,
}

impl AppConfig {
	/// Reads and validates the full configuration from the environment
	pub fn from_env() -> Result<Self, ConfigError> {
		let sepolia_rpc_url = env::var("SEPOLIA_RPC_URL").map_err(|_| {
			ConfigError::env_error(
				"Missing environment variable: SEPOLIA_RPC_URL",
				None,
				None,
			)
		})?;
		validate_rpc_url("SEPOLIA_RPC_URL", &sepolia_rpc_url)?;

		let staking_contract_raw = env::var("STAKING_CONTRACT_ADDRESS")
			.unwrap_or_else(|_| DEFAULT_STAKING_CONTRACT_ADDRESS.to_string());
		let staking_contract = staking_contract_raw.parse::<Address>().map_err(|e| {
			ConfigError::parse_error(
				"Invalid EVM address in STAKING_CONTRACT_ADDRESS",
				Some(Box::new(e)),
				Some(HashMap::from([(
					"value".to_string(),
					staking_contract_raw.clone(),
				)])),
			)
		})?;

		let solana_rpc_url =
			env::var("SOLANA_RPC_URL").unwrap_or_else(|_| DEFAULT_SOLANA_RPC_URL.to_string());
		validate_rpc_url("SOLANA_RPC_URL", &solana_rpc_url)?;

		let mint_address = env::var("SPL_TOKEN_MINT_ADDRESS")
			.unwrap_or_else(|_| DEFAULT_SPL_TOKEN_MINT_ADDRESS.to_string());
		if !is_valid_pubkey(&mint_address) {
			return Err(ConfigError::validation_error(
				"Invalid base58 public key in SPL_TOKEN_MINT_ADDRESS",
				None,
				Some(HashMap::from([("value".to_string(), mint_address)])),
			));
		}

		let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
		let port = match env::var("PORT") {
			Ok(raw) => raw.parse::<u16>().map_err(|e| {
				ConfigError::parse_error(
					"Invalid PORT value",
					Some(Box::new(e)),
					Some(HashMap::from([("value".to_string(), raw.clone())])),
				)
			})?,
			Err(_) => DEFAULT_PORT,
		};

		Ok(Self {
			api: ApiConfig { host, port },
			evm: EvmConfig {
				rpc_url: sepolia_rpc_url,
				staking_contract,
			},
			solana: SolanaConfig {
				rpc_url: solana_rpc_url,
				mint_address,
			},
		})
	}
}

fn validate_rpc_url(var: &str, value: &str) -> Result<(), ConfigError> {
	let url = Url::parse(value).map_err(|e| {
		ConfigError::parse_error(
			format!("Invalid URL in {}", var),
			Some(Box::new(e)),
			Some(HashMap::from([("value".to_string(), value.to_string())])),
		)
	})?;

	match url.scheme() {
		"http" | "https" => Ok(()),
		other => Err(ConfigError::validation_error(
			format!("Unsupported URL scheme in {}: {}", var, other),
			None,
			None,
		)),
	}
}
