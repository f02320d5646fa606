//! Integration tests for the Solana token query routes.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::json;

use chain_query_service::{
	api::solana::{get_token_balance, get_token_supply},
	models::{KeyedTokenAccount, TokenAmount},
	services::blockchain::{BlockChainError, TokenQueryClient},
};

use crate::integration::mocks::MockTokenClient;

const OWNER: &str = "4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T";
const ACCOUNT_A: &str = "EKpQGSJtjMFqKZ9KQanSqYXRcF8fBopzLHYxdM65zcjm";
const ACCOUNT_B: &str = "C2gJg6tKpQs41PRS1nC8aw3ZKNZK3HQQZGVrDFDup5nx";

fn token_data(client: MockTokenClient) -> web::Data<Arc<dyn TokenQueryClient>> {
	web::Data::new(Arc::new(client) as Arc<dyn TokenQueryClient>)
}

#[actix_web::test]
async fn test_get_token_supply_returns_raw_amount() {
	let mut mock = MockTokenClient::new();
	mock.expect_get_token_supply().times(1).returning(|| {
		Ok(TokenAmount {
			amount: "771549369810012".to_string(),
			decimals: 6,
			ui_amount_string: Some("771549369.810012".to_string()),
		})
	});

	let app = test::init_service(
		App::new()
			.app_data(token_data(mock))
			.route("/solana/token-supply", web::get().to(get_token_supply))
			.route(
				"/solana/token-balance/{address}",
				web::get().to(get_token_balance),
			),
	)
	.await;
	let req = test::TestRequest::get()
		.uri("/solana/token-supply")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), 200);
	let body: serde_json::Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "totalSupply": "771549369810012" }));
}

#[actix_web::test]
async fn test_get_token_supply_rpc_failure_returns_generic_500() {
	let mut mock = MockTokenClient::new();
	mock.expect_get_token_supply()
		.times(1)
		.returning(|| Err(BlockChainError::connection_error("timed out", None, None)));

	let app = test::init_service(
		App::new()
			.app_data(token_data(mock))
			.route("/solana/token-supply", web::get().to(get_token_supply))
			.route(
				"/solana/token-balance/{address}",
				web::get().to(get_token_balance),
			),
	)
	.await;
	let req = test::TestRequest::get()
		.uri("/solana/token-supply")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), 500);
	let body: serde_json::Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "error": "Failed to fetch token supply" }));
}

#[actix_web::test]
async fn test_get_token_balance_uses_first_account() {
	let mut mock = MockTokenClient::new();
	mock.expect_get_token_accounts_by_owner()
		.withf(|owner| owner == OWNER)
		.times(1)
		.returning(|_| {
			Ok(vec![
				KeyedTokenAccount {
					pubkey: ACCOUNT_A.to_string(),
				},
				KeyedTokenAccount {
					pubkey: ACCOUNT_B.to_string(),
				},
			])
		});
	mock.expect_get_token_account_balance()
		.withf(|account| account == ACCOUNT_A)
		.times(1)
		.returning(|_| {
			Ok(TokenAmount {
				amount: "42000000".to_string(),
				decimals: 6,
				ui_amount_string: Some("42".to_string()),
			})
		});

	let app = test::init_service(
		App::new()
			.app_data(token_data(mock))
			.route("/solana/token-supply", web::get().to(get_token_supply))
			.route(
				"/solana/token-balance/{address}",
				web::get().to(get_token_balance),
			),
	)
	.await;
	let req = test::TestRequest::get()
		.uri(&format!("/solana/token-balance/{}", OWNER))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), 200);
	let body: serde_json::Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "balance": "42000000" }));
}

#[actix_web::test]
async fn test_get_token_balance_no_accounts_returns_404() {
	let mut mock = MockTokenClient::new();
	mock.expect_get_token_accounts_by_owner()
		.times(1)
		.returning(|_| Ok(vec![]));
	mock.expect_get_token_account_balance().times(0);

	let app = test::init_service(
		App::new()
			.app_data(token_data(mock))
			.route("/solana/token-supply", web::get().to(get_token_supply))
			.route(
				"/solana/token-balance/{address}",
				web::get().to(get_token_balance),
			),
	)
	.await;
	let req = test::TestRequest::get()
		.uri(&format!("/solana/token-balance/{}", OWNER))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), 404);
	let body: serde_json::Value = test::read_body_json(resp).await;
	assert_eq!(
		body,
		json!({ "error": "No token account found for this address" })
	);
}

#[actix_web::test]
async fn test_get_token_balance_accounts_rpc_failure_returns_generic_500() {
	let mut mock = MockTokenClient::new();
	mock.expect_get_token_accounts_by_owner()
		.times(1)
		.returning(|_| Err(BlockChainError::request_error("rpc error", None, None)));
	mock.expect_get_token_account_balance().times(0);

	let app = test::init_service(
		App::new()
			.app_data(token_data(mock))
			.route("/solana/token-supply", web::get().to(get_token_supply))
			.route(
				"/solana/token-balance/{address}",
				web::get().to(get_token_balance),
			),
	)
	.await;
	let req = test::TestRequest::get()
		.uri(&format!("/solana/token-balance/{}", OWNER))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), 500);
	let body: serde_json::Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "error": "Failed to fetch token balance" }));
}

#[actix_web::test]
async fn test_get_token_balance_balance_rpc_failure_returns_generic_500() {
	let mut mock = MockTokenClient::new();
	mock.expect_get_token_accounts_by_owner()
		.times(1)
		.returning(|_| {
			Ok(vec![KeyedTokenAccount {
				pubkey: ACCOUNT_A.to_string(),
			}])
		});
	mock.expect_get_token_account_balance()
		.times(1)
		.returning(|_| Err(BlockChainError::connection_error("timed out", None, None)));

	let app = test::init_service(
		App::new()
			.app_data(token_data(mock))
			.route("/solana/token-supply", web::get().to(get_token_supply))
			.route(
				"/solana/token-balance/{address}",
				web::get().to(get_token_balance),
			),
	)
	.await;
	let req = test::TestRequest::get()
		.uri(&format!("/solana/token-balance/{}", OWNER))
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), 500);
	let body: serde_json::Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "error": "Failed to fetch token balance" }));
}

#[actix_web::test]
async fn test_get_token_balance_invalid_owner_never_reaches_client() {
	let mut mock = MockTokenClient::new();
	mock.expect_get_token_accounts_by_owner().times(0);
	mock.expect_get_token_account_balance().times(0);

	let app = test::init_service(
		App::new()
			.app_data(token_data(mock))
			.route("/solana/token-supply", web::get().to(get_token_supply))
			.route(
				"/solana/token-balance/{address}",
				web::get().to(get_token_balance),
			),
	)
	.await;
	let req = test::TestRequest::get()
		.uri("/solana/token-balance/not-base58-0OIl")
		.to_request();
	let resp = test::call_service(&app, req).await;

	assert_eq!(resp.status(), 500);
	let body: serde_json::Value = test::read_body_json(resp).await;
	assert_eq!(body, json!({ "error": "Failed to fetch token balance" }));
}
