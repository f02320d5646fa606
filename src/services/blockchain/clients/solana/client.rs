//! Solana blockchain client implementation.
//!
//! Read access to SPL token state for a fixed mint: total supply, the token
//! accounts held by an owner, and the balance of a specific token account.

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tracing::instrument;

use crate::{
	models::{KeyedTokenAccount, SolanaConfig, TokenAmount},
	services::blockchain::{
		client::TokenQueryClient,
		transports::{BlockchainTransport, SolanaTransportClient},
		BlockChainError,
	},
};

/// Client implementation for the Solana token RPC methods
///
/// Bound at construction to one SPL mint; all queries are scoped to it.
#[derive(Clone)]
pub struct SolanaClient<T: Send + Sync + Clone> {
	/// The underlying HTTP transport client for RPC communication
	http_client: T,
	/// Base58 mint address all token queries are scoped to
	mint_address: String,
}

impl<T: Send + Sync + Clone> SolanaClient<T> {
	/// Creates a new Solana client instance with a specific transport client
	pub fn new_with_transport(http_client: T, mint_address: String) -> Self {
		Self {
			http_client,
			mint_address,
		}
	}

	fn request_metadata(&self, method: &str) -> HashMap<String, String> {
		HashMap::from([
			("method".to_string(), method.to_string()),
			("mint".to_string(), self.mint_address.clone()),
		])
	}
}

impl SolanaClient<SolanaTransportClient> {
	/// Creates a new Solana client instance
	///
	/// # Arguments
	/// * `config` - Solana configuration containing the RPC endpoint and mint address
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or connection error
	pub async fn new(config: &SolanaConfig) -> Result<Self, anyhow::Error> {
		let client = SolanaTransportClient::new(&config.rpc_url)
			.await
			.context("Failed to initialize Solana transport")?;
		Ok(Self::new_with_transport(
			client,
			config.mint_address.clone(),
		))
	}
}

impl<T: Send + Sync + Clone + BlockchainTransport> SolanaClient<T> {
	/// Extracts the `result.value` payload from a JSON-RPC response, mapping
	/// the RPC `error` member to a request error.
	fn extract_value(
		&self,
		response: serde_json::Value,
		method: &str,
	) -> Result<serde_json::Value, BlockChainError> {
		if let Some(rpc_error) = response.get("error") {
			return Err(BlockChainError::request_error(
				format!("RPC error from {}: {}", method, rpc_error),
				None,
				Some(self.request_metadata(method)),
			));
		}

		response
			.get("result")
			.and_then(|r| r.get("value"))
			.cloned()
			.ok_or_else(|| {
				BlockChainError::request_error(
					format!("Missing 'result.value' field in {} response", method),
					None,
					Some(self.request_metadata(method)),
				)
			})
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> TokenQueryClient for SolanaClient<T> {
	/// Retrieves the total supply of the configured mint
	#[instrument(skip(self))]
	async fn get_token_supply(&self) -> Result<TokenAmount, BlockChainError> {
		let params = json!([self.mint_address]);

		let response = self
			.http_client
			.send_raw_request("getTokenSupply", Some(params))
			.await
			.map_err(|e| {
				BlockChainError::request_error(
					"Failed to get token supply",
					Some(Box::new(e)),
					Some(self.request_metadata("getTokenSupply")),
				)
			})?;

		let value = self.extract_value(response, "getTokenSupply")?;
		serde_json::from_value(value).map_err(|e| {
			BlockChainError::request_error(
				"Failed to parse token supply",
				Some(Box::new(e)),
				None,
			)
		})
	}

	/// Retrieves the token accounts held by `owner` for the configured mint
	#[instrument(skip(self))]
	async fn get_token_accounts_by_owner(
		&self,
		owner: &str,
	) -> Result<Vec<KeyedTokenAccount>, BlockChainError> {
		let params = json!([
			owner,
			{ "mint": self.mint_address },
			{ "encoding": "base64" }
		]);

		let response = self
			.http_client
			.send_raw_request("getTokenAccountsByOwner", Some(params))
			.await
			.map_err(|e| {
				BlockChainError::request_error(
					format!("Failed to get token accounts for owner: {}", owner),
					Some(Box::new(e)),
					Some(self.request_metadata("getTokenAccountsByOwner")),
				)
			})?;

		let value = self.extract_value(response, "getTokenAccountsByOwner")?;
		serde_json::from_value(value).map_err(|e| {
			BlockChainError::request_error(
				"Failed to parse token account list",
				Some(Box::new(e)),
				None,
			)
		})
	}

	/// Retrieves the balance of a specific token account
	#[instrument(skip(self))]
	async fn get_token_account_balance(
		&self,
		account: &str,
	) -> Result<TokenAmount, BlockChainError> {
		let params = json!([account]);

		let response = self
			.http_client
			.send_raw_request("getTokenAccountBalance", Some(params))
			.await
			.map_err(|e| {
				BlockChainError::request_error(
					format!("Failed to get balance for token account: {}", account),
					Some(Box::new(e)),
					Some(self.request_metadata("getTokenAccountBalance")),
				)
			})?;

		let value = self.extract_value(response, "getTokenAccountBalance")?;
		serde_json::from_value(value).map_err(|e| {
			BlockChainError::request_error(
				"Failed to parse token account balance",
				Some(Box::new(e)),
				None,
			)
		})
	}
}
