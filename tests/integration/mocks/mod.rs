//! Mock implementations of the query client traits.

use alloy::primitives::Address;
use async_trait::async_trait;
use mockall::mock;

use chain_query_service::{
	models::{KeyedTokenAccount, StakerInfo, TokenAmount},
	services::blockchain::{BlockChainError, StakingQueryClient, TokenQueryClient},
};

mock! {
	pub StakingClient {}

	#[async_trait]
	impl StakingQueryClient for StakingClient {
		async fn get_staker_info(&self, staker: Address) -> Result<StakerInfo, BlockChainError>;
	}
}

mock! {
	pub TokenClient {}

	#[async_trait]
	impl TokenQueryClient for TokenClient {
		async fn get_token_supply(&self) -> Result<TokenAmount, BlockChainError>;
		async fn get_token_accounts_by_owner(
			&self,
			owner: &str,
		) -> Result<Vec<KeyedTokenAccount>, BlockChainError>;
		async fn get_token_account_balance(
			&self,
			account: &str,
		) -> Result<TokenAmount, BlockChainError>;
	}
}
