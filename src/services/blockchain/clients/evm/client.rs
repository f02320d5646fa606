//! EVM-compatible blockchain client implementation.
//!
//! This module provides read access to the staking contract on an
//! EVM-compatible chain: it ABI-encodes the `getStakerInfo(address)` call,
//! submits it through `eth_call` and decodes the returned `uint256` 3-tuple.

use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use tracing::instrument;

use crate::{
	models::{EvmConfig, StakerInfo},
	services::blockchain::{
		client::StakingQueryClient,
		transports::{BlockchainTransport, EvmTransportClient},
		BlockChainError,
	},
};
use alloy::{
	primitives::Address,
	sol,
	sol_types::SolCall,
};

sol! {
	/// Read method of the staking contract; returns staked amount, reward
	/// due and last-staked timestamp for a staker.
	function getStakerInfo(address staker) external view returns (uint256 stakedAmount, uint256 rewardDue, uint256 lastStakedTime);
}

/// Client implementation for Ethereum Virtual Machine (EVM) compatible blockchains
///
/// Bound at construction to one contract address; every query issues a single
/// read-only `eth_call` against it through the HTTP transport.
#[derive(Clone)]
pub struct EvmClient<T: Send + Sync + Clone> {
	/// The underlying HTTP transport client for RPC communication
	http_client: T,
	/// Address of the staking contract all calls are directed at
	contract_address: Address,
}

impl<T: Send + Sync + Clone> EvmClient<T> {
	/// Creates a new EVM client instance with a specific transport client
	pub fn new_with_transport(http_client: T, contract_address: Address) -> Self {
		Self {
			http_client,
			contract_address,
		}
	}
}

impl EvmClient<EvmTransportClient> {
	/// Creates a new EVM client instance
	///
	/// # Arguments
	/// * `config` - EVM configuration containing the RPC endpoint and contract address
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or connection error
	pub async fn new(config: &EvmConfig) -> Result<Self, anyhow::Error> {
		let client = EvmTransportClient::new(&config.rpc_url)
			.await
			.context("Failed to initialize EVM transport")?;
		Ok(Self::new_with_transport(client, config.staking_contract))
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> StakingQueryClient for EvmClient<T> {
	/// Retrieves the staking position for an address with proper error handling
	#[instrument(skip(self), fields(staker = %staker))]
	async fn get_staker_info(&self, staker: Address) -> Result<StakerInfo, BlockChainError> {
		let calldata = getStakerInfoCall { staker }.abi_encode();

		let params = json!([
			{
				"to": self.contract_address.to_string(),
				"data": format!("0x{}", hex::encode(calldata)),
			},
			"latest"
		]);

		let response = self
			.http_client
			.send_raw_request("eth_call", Some(params))
			.await
			.map_err(|e| {
				BlockChainError::request_error(
					"Failed to execute eth_call",
					Some(Box::new(e)),
					Some(HashMap::from([(
						"contract".to_string(),
						self.contract_address.to_string(),
					)])),
				)
			})?;

		// A contract revert or node-side rejection arrives as a JSON-RPC error member
		if let Some(rpc_error) = response.get("error") {
			return Err(BlockChainError::request_error(
				format!("RPC error from eth_call: {}", rpc_error),
				None,
				Some(HashMap::from([(
					"contract".to_string(),
					self.contract_address.to_string(),
				)])),
			));
		}

		let hex_str = response
			.get("result")
			.and_then(|v| v.as_str())
			.ok_or_else(|| {
				BlockChainError::request_error("Missing 'result' field", None, None)
			})?;

		let return_data = hex::decode(hex_str.trim_start_matches("0x")).map_err(|e| {
			BlockChainError::request_error(
				"Failed to decode eth_call result as hex",
				Some(Box::new(e)),
				None,
			)
		})?;

		let decoded = getStakerInfoCall::abi_decode_returns(&return_data).map_err(|e| {
			BlockChainError::request_error(
				"Failed to decode getStakerInfo return values",
				Some(Box::new(e)),
				None,
			)
		})?;

		Ok(StakerInfo {
			staked_amount: decoded.stakedAmount,
			reward_due: decoded.rewardDue,
			last_staked_time: decoded.lastStakedTime,
		})
	}
}
