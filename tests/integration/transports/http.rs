//! Integration tests for the JSON-RPC HTTP transports, using a local
//! mockito server as the upstream endpoint.

use mockito::{Matcher, Server};
use serde_json::json;

use chain_query_service::services::blockchain::{
	BlockchainTransport, EvmTransportClient, SolanaTransportClient, TransportError,
};

#[tokio::test]
async fn test_evm_transport_probes_with_net_version() {
	let mut server = Server::new_async().await;
	let probe = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "net_version" })))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"11155111"}"#)
		.create_async()
		.await;

	let client = EvmTransportClient::new(&server.url()).await.unwrap();
	probe.assert_async().await;
	assert!(client.current_url().starts_with("http://127.0.0.1"));
}

#[tokio::test]
async fn test_solana_transport_probes_with_get_health() {
	let mut server = Server::new_async().await;
	let probe = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "getHealth" })))
		.with_status(200)
		.with_header("content-type", "application/json")
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"ok"}"#)
		.create_async()
		.await;

	let client = SolanaTransportClient::new(&server.url()).await;
	probe.assert_async().await;
	assert!(client.is_ok());
}

#[tokio::test]
async fn test_probe_failure_aborts_construction() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/")
		.with_status(500)
		.with_body("upstream down")
		.create_async()
		.await;

	let result = EvmTransportClient::new(&server.url()).await;
	assert!(result.is_err());
	assert!(result
		.err()
		.unwrap()
		.to_string()
		.contains("status 500"));
}

#[tokio::test]
async fn test_send_raw_request_wraps_json_rpc_envelope() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "net_version" })))
		.with_status(200)
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"11155111"}"#)
		.create_async()
		.await;

	let call = server
		.mock("POST", "/")
		.match_body(Matcher::Json(json!({
			"jsonrpc": "2.0",
			"id": 1,
			"method": "eth_call",
			"params": [{ "to": "0x00", "data": "0x01" }, "latest"]
		})))
		.with_status(200)
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"0x1"}"#)
		.expect(1)
		.create_async()
		.await;

	let client = EvmTransportClient::new(&server.url()).await.unwrap();
	let response = client
		.send_raw_request(
			"eth_call",
			Some(json!([{ "to": "0x00", "data": "0x01" }, "latest"])),
		)
		.await
		.unwrap();

	assert_eq!(response["result"], "0x1");
	call.assert_async().await;
}

#[tokio::test]
async fn test_http_error_status_is_surfaced_without_retry() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "getHealth" })))
		.with_status(200)
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"ok"}"#)
		.create_async()
		.await;

	let failing = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "getTokenSupply" })))
		.with_status(429)
		.with_body("rate limited")
		.expect(1)
		.create_async()
		.await;

	let client = SolanaTransportClient::new(&server.url()).await.unwrap();
	let result = client
		.send_raw_request("getTokenSupply", Some(json!(["mint"])))
		.await;

	match result {
		Err(TransportError::Http {
			status_code, body, ..
		}) => {
			assert_eq!(status_code.as_u16(), 429);
			assert_eq!(body, "rate limited");
		}
		Err(other) => panic!("Expected HTTP transport error, got {}", other),
		Ok(_) => panic!("Expected HTTP transport error, got success"),
	}
	failing.assert_async().await;
}

#[tokio::test]
async fn test_non_json_body_is_a_parse_error() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "net_version" })))
		.with_status(200)
		.with_body(r#"{"jsonrpc":"2.0","id":1,"result":"11155111"}"#)
		.create_async()
		.await;

	let garbled = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "eth_call" })))
		.with_status(200)
		.with_body("<html>gateway error</html>")
		.create_async()
		.await;

	let client = EvmTransportClient::new(&server.url()).await.unwrap();
	let result = client.send_raw_request("eth_call", Some(json!([]))).await;

	assert!(matches!(result, Err(TransportError::ResponseParse(_))));
	garbled.assert_async().await;
}
