//! Core query client interfaces.
//!
//! These traits are the seams between the HTTP handlers and the chain
//! clients: handlers depend on the traits only, so tests can inject doubles
//! and no global client state is needed.

use async_trait::async_trait;

use crate::{
	models::{KeyedTokenAccount, StakerInfo, TokenAmount},
	services::blockchain::BlockChainError,
};
use alloy::primitives::Address;

/// Read access to the staking contract on an EVM chain
#[async_trait]
pub trait StakingQueryClient: Send + Sync {
	/// Calls `getStakerInfo(address)` on the configured staking contract
	///
	/// Issues exactly one read-only `eth_call` per invocation.
	///
	/// # Arguments
	/// * `staker` - The address whose staking position is queried
	///
	/// # Returns
	/// * `Result<StakerInfo, BlockChainError>` - Decoded 3-tuple or an error
	async fn get_staker_info(&self, staker: Address) -> Result<StakerInfo, BlockChainError>;
}

/// Read access to SPL token state on Solana
#[async_trait]
pub trait TokenQueryClient: Send + Sync {
	/// Calls `getTokenSupply` for the configured mint
	async fn get_token_supply(&self) -> Result<TokenAmount, BlockChainError>;

	/// Calls `getTokenAccountsByOwner` for the given owner, filtered by the
	/// configured mint.
	///
	/// The returned order is whatever the RPC provider produced. It is not
	/// guaranteed to be stable; callers that pick the first entry inherit
	/// that limitation.
	///
	/// # Arguments
	/// * `owner` - Base58 public key of the owning wallet
	async fn get_token_accounts_by_owner(
		&self,
		owner: &str,
	) -> Result<Vec<KeyedTokenAccount>, BlockChainError>;

	/// Calls `getTokenAccountBalance` for a specific token account
	///
	/// # Arguments
	/// * `account` - Base58 public key of the token account
	async fn get_token_account_balance(
		&self,
		account: &str,
	) -> Result<TokenAmount, BlockChainError>;
}
