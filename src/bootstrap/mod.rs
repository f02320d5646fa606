//! Bootstrap module for initializing configuration and chain clients.
//!
//! Everything here runs once, before the HTTP server binds. A missing or
//! malformed configuration value, or an unreachable RPC endpoint, aborts
//! startup; per-request code never constructs clients or re-reads the
//! environment.

use std::{error::Error, sync::Arc};

use tracing::info;

use crate::{
	models::AppConfig,
	services::blockchain::{EvmClient, SolanaClient, StakingQueryClient, TokenQueryClient},
};

/// Type alias for handling service results
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Shared, immutable client handles injected into the HTTP handlers
pub struct QueryClients {
	pub staking: Arc<dyn StakingQueryClient>,
	pub token: Arc<dyn TokenQueryClient>,
}

/// Initializes the chain clients from the validated configuration.
///
/// Each transport probes its endpoint once; an endpoint that cannot be
/// reached fails startup here rather than on the first request.
///
/// # Arguments
/// * `config` - Validated application configuration
///
/// # Returns
/// * `Result<QueryClients>` - Shared client handles or a startup error
pub async fn initialize_clients(config: &AppConfig) -> Result<QueryClients> {
	let evm_client = EvmClient::new(&config.evm)
		.await
		.map_err(|e| format!("Failed to initialize EVM client: {}", e))?;
	info!(
		rpc_url = %config.evm.rpc_url,
		contract = %config.evm.staking_contract,
		"EVM client initialized"
	);

	let solana_client = SolanaClient::new(&config.solana)
		.await
		.map_err(|e| format!("Failed to initialize Solana client: {}", e))?;
	info!(
		rpc_url = %config.solana.rpc_url,
		mint = %config.solana.mint_address,
		"Solana client initialized"
	);

	Ok(QueryClients {
		staking: Arc::new(evm_client),
		token: Arc::new(solana_client),
	})
}
