//! Blockchain client implementations.
//!
//! Contains specific implementations for different blockchain types:
//! - EVM client for the Sepolia staking contract
//! - Solana client for SPL token queries

mod evm {
	pub mod client;
}
mod solana {
	pub mod client;
}

pub use evm::client::EvmClient;
pub use solana::client::SolanaClient;
