//! HTTP transport implementation for blockchain interactions.
//!
//! This module provides a generic HTTP client for talking to a single
//! JSON-RPC endpoint. The endpoint URL is fixed at construction time and the
//! connection is probed once at startup; a dead endpoint is a startup error,
//! not a per-request error. Requests are not retried.

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::services::blockchain::transports::{BlockchainTransport, TransportError};

/// Basic HTTP transport client for blockchain interactions
///
/// The client holds a pooled connection to one RPC endpoint and is cheap to
/// clone; clones share the underlying connection pool. It is thread-safe and
/// can be shared across request handlers.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client for making requests
	pub client: reqwest::Client,
	/// The JSON-RPC endpoint all requests are sent to
	url: Url,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport client bound to a single endpoint.
	///
	/// Sends `test_connection_payload` (a stringified JSON-RPC request) to the
	/// endpoint once to verify it is reachable before the client is handed out.
	///
	/// # Arguments
	/// * `rpc_url` - The JSON-RPC endpoint URL
	/// * `test_connection_payload` - JSON-RPC payload used to probe the endpoint
	///
	/// # Returns
	/// * `Result<Self, anyhow::Error>` - New client instance or connection error
	pub async fn new(rpc_url: &str, test_connection_payload: &str) -> Result<Self, anyhow::Error> {
		let url = Url::parse(rpc_url).with_context(|| format!("Invalid RPC URL: {}", rpc_url))?;

		let client = reqwest::ClientBuilder::new()
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(Duration::from_secs(30))
			.connect_timeout(Duration::from_secs(20))
			.build()
			.context("Failed to create HTTP client")?;

		let test_request: Value = serde_json::from_str(test_connection_payload)
			.context("Failed to parse test payload as JSON")?;

		let response = client
			.post(url.clone())
			.json(&test_request)
			.send()
			.await
			.with_context(|| format!("Failed to connect to {}", url))?;

		let status = response.status();
		if !status.is_success() {
			return Err(anyhow::anyhow!(
				"Failed to connect to {}: status {}",
				url,
				status.as_u16()
			));
		}

		Ok(Self { client, url })
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	/// Returns the configured RPC endpoint URL
	fn current_url(&self) -> String {
		self.url.to_string()
	}

	/// Sends a JSON-RPC request to the blockchain node
	///
	/// Wraps the method and parameters in a JSON-RPC 2.0 envelope, posts it to
	/// the configured endpoint and returns the raw response document. The
	/// caller is responsible for interpreting the `result` / `error` members.
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method name to call
	/// * `params` - Optional parameters for the method call
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - JSON response or error with context
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let payload = self.customize_request(method, params);

		let request_body = serde_json::to_string(&payload).map_err(|e| {
			TransportError::request_serialization(
				"Failed to serialize JSON-RPC request",
				Some(Box::new(e)),
				None,
			)
		})?;

		let response = self
			.client
			.post(self.url.clone())
			.header("Content-Type", "application/json")
			.body(request_body)
			.send()
			.await
			.map_err(|e| {
				TransportError::network(
					format!("Failed to send request to {}", self.url),
					Some(Box::new(e)),
					None,
				)
			})?;

		let status = response.status();
		let body = response.text().await.map_err(|e| {
			TransportError::network(
				"Failed to read response body",
				Some(Box::new(e)),
				None,
			)
		})?;

		if !status.is_success() {
			return Err(TransportError::http(
				status,
				self.url.to_string(),
				body,
				None,
				None,
			));
		}

		serde_json::from_str(&body).map_err(|e| {
			TransportError::response_parse(
				"Failed to parse response body as JSON",
				Some(Box::new(e)),
				None,
			)
		})
	}
}
