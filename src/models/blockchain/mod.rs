//! Blockchain-specific data models.
//!
//! Typed representations of the RPC payloads the service reads:
//! - EVM staking contract results
//! - Solana token amounts and token accounts

mod evm;
mod solana;

pub use evm::StakerInfo;
pub use solana::{KeyedTokenAccount, TokenAmount};
