//! EVM transport implementation for blockchain interactions.
//!
//! Wraps the generic HTTP transport with the EVM connectivity probe so that
//! client construction fails at startup when the configured Sepolia endpoint
//! is unreachable.

use serde::Serialize;
use serde_json::Value;

use crate::services::blockchain::transports::{
	BlockchainTransport, HttpTransportClient, TransportError,
};

/// A client for interacting with EVM-compatible blockchain nodes
#[derive(Clone, Debug)]
pub struct EvmTransportClient {
	/// The underlying HTTP transport client that handles actual RPC communications
	pub http_client: HttpTransportClient,
}

impl EvmTransportClient {
	/// Creates a new EVM transport client, probing the endpoint with `net_version`
	///
	/// # Arguments
	/// * `rpc_url` - The JSON-RPC endpoint URL
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - A new client instance or connection error
	pub async fn new(rpc_url: &str) -> Result<Self, anyhow::Error> {
		let test_connection_payload =
			r#"{"id":1,"jsonrpc":"2.0","method":"net_version","params":[]}"#;
		let http_client = HttpTransportClient::new(rpc_url, test_connection_payload).await?;
		Ok(Self { http_client })
	}
}

#[async_trait::async_trait]
impl BlockchainTransport for EvmTransportClient {
	fn current_url(&self) -> String {
		self.http_client.current_url()
	}

	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.http_client.send_raw_request(method, params).await
	}
}
