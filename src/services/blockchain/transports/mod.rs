//! Network transport implementations for blockchain clients.
//!
//! Provides a generic single-endpoint JSON-RPC HTTP transport plus thin
//! chain-specific wrappers that choose the startup connectivity probe.
//!
//! Requests are never retried and the endpoint never rotates: every upstream
//! failure is terminal for the request that triggered it.

mod evm {
	pub mod http;
}
mod solana {
	pub mod http;
}

mod error;
mod http;

pub use error::TransportError;
pub use evm::http::EvmTransportClient;
pub use http::HttpTransportClient;
pub use solana::http::SolanaTransportClient;

use serde::Serialize;
use serde_json::{json, Value};

/// Base trait for all blockchain transport clients
#[async_trait::async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Get the endpoint URL used by the transport
	fn current_url(&self) -> String;

	/// Send a raw JSON-RPC request to the blockchain node
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize;

	/// Builds the JSON-RPC 2.0 request envelope
	fn customize_request<P>(&self, method: &str, params: Option<P>) -> Value
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": method,
			"params": params.map(|p| p.into())
		})
	}
}
