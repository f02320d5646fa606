//! Blockchain client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for reading from
//! different blockchain networks. Includes:
//!
//! - Query traits used as dependency-injection seams by the HTTP handlers
//! - EVM and Solana specific clients
//! - Single-endpoint JSON-RPC transports
//! - Error handling for blockchain operations

mod client;
mod clients;
mod error;
mod transports;

pub use client::{StakingQueryClient, TokenQueryClient};
pub use clients::{EvmClient, SolanaClient};
pub use error::BlockChainError;
pub use transports::{
	BlockchainTransport, EvmTransportClient, HttpTransportClient, SolanaTransportClient,
	TransportError,
};
