//! Solana token query handlers.
//!
//! `GET /solana/token-supply` reports the total supply of the configured
//! mint. `GET /solana/token-balance/{address}` looks up the owner's token
//! accounts for the mint and reports the balance of the first one; an owner
//! with no matching account is a 404, distinct from upstream failure.
//!
//! When an owner holds several accounts for the mint, the first entry in
//! provider-returned order is used. Provider ordering is not guaranteed to
//! be stable; this is a documented limitation, not a selection policy.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{error, warn};

use crate::{
	api::error::QueryError,
	services::blockchain::TokenQueryClient,
	utils::{
		is_valid_pubkey,
		metrics::{QUERY_FAILURES, QUERY_REQUESTS},
	},
};

const SUPPLY_ROUTE: &str = "solana_token_supply";
const BALANCE_ROUTE: &str = "solana_token_balance";
const SUPPLY_FETCH_ERROR: &str = "Failed to fetch token supply";
const BALANCE_FETCH_ERROR: &str = "Failed to fetch token balance";
const NO_ACCOUNT_ERROR: &str = "No token account found for this address";

/// Handler for `GET /solana/token-supply`
pub async fn get_token_supply(
	client: web::Data<Arc<dyn TokenQueryClient>>,
) -> Result<HttpResponse, QueryError> {
	QUERY_REQUESTS.with_label_values(&[SUPPLY_ROUTE]).inc();

	match client.get_token_supply().await {
		Ok(supply) => Ok(HttpResponse::Ok().json(json!({ "totalSupply": supply.amount }))),
		Err(e) => {
			error!(error = %e, "Error fetching token supply");
			QUERY_FAILURES
				.with_label_values(&[SUPPLY_ROUTE, "upstream"])
				.inc();
			Err(QueryError::upstream(SUPPLY_FETCH_ERROR))
		}
	}
}

/// Handler for `GET /solana/token-balance/{address}`
pub async fn get_token_balance(
	path: web::Path<String>,
	client: web::Data<Arc<dyn TokenQueryClient>>,
) -> Result<HttpResponse, QueryError> {
	QUERY_REQUESTS.with_label_values(&[BALANCE_ROUTE]).inc();

	let owner = path.into_inner();
	if !is_valid_pubkey(&owner) {
		warn!(owner = %owner, "Rejected malformed owner public key");
		QUERY_FAILURES
			.with_label_values(&[BALANCE_ROUTE, "bad_address"])
			.inc();
		return Err(QueryError::upstream(BALANCE_FETCH_ERROR));
	}

	let accounts = client
		.get_token_accounts_by_owner(&owner)
		.await
		.map_err(|e| {
			error!(owner = %owner, error = %e, "Error fetching token accounts");
			QUERY_FAILURES
				.with_label_values(&[BALANCE_ROUTE, "upstream"])
				.inc();
			QueryError::upstream(BALANCE_FETCH_ERROR)
		})?;

	let Some(first_account) = accounts.first() else {
		QUERY_FAILURES
			.with_label_values(&[BALANCE_ROUTE, "not_found"])
			.inc();
		return Err(QueryError::not_found(NO_ACCOUNT_ERROR));
	};

	match client.get_token_account_balance(&first_account.pubkey).await {
		Ok(balance) => Ok(HttpResponse::Ok().json(json!({ "balance": balance.amount }))),
		Err(e) => {
			error!(owner = %owner, account = %first_account.pubkey, error = %e, "Error fetching token balance");
			QUERY_FAILURES
				.with_label_values(&[BALANCE_ROUTE, "upstream"])
				.inc();
			Err(QueryError::upstream(BALANCE_FETCH_ERROR))
		}
	}
}
