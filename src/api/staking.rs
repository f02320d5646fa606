//! Staking query handler.
//!
//! `GET /staking/{address}` reads the staking position for an address via a
//! single `eth_call` and returns the three values as decimal strings in
//! fixed order. Any failure, including a malformed address, is surfaced as
//! the generic 500 payload; nothing internal leaks to the caller.

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use alloy::primitives::Address;
use serde::Serialize;
use tracing::{error, warn};

use crate::{
	api::error::QueryError,
	models::StakerInfo,
	services::blockchain::StakingQueryClient,
	utils::metrics::{QUERY_FAILURES, QUERY_REQUESTS},
};

const ROUTE: &str = "staking";
const FETCH_ERROR: &str = "An error occurred while fetching staking info";

/// Response body for the staking route; all values are decimal strings so
/// 256-bit amounts survive JSON without precision loss.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StakerInfoResponse {
	pub staked_amount: String,
	pub reward_due: String,
	pub last_staked_time: String,
}

impl From<StakerInfo> for StakerInfoResponse {
	fn from(info: StakerInfo) -> Self {
		Self {
			staked_amount: info.staked_amount.to_string(),
			reward_due: info.reward_due.to_string(),
			last_staked_time: info.last_staked_time.to_string(),
		}
	}
}

/// Handler for `GET /staking/{address}`
pub async fn get_staking_info(
	path: web::Path<String>,
	client: web::Data<Arc<dyn StakingQueryClient>>,
) -> Result<HttpResponse, QueryError> {
	QUERY_REQUESTS.with_label_values(&[ROUTE]).inc();

	let raw_address = path.into_inner();
	let staker: Address = raw_address.parse().map_err(|e| {
		warn!(address = %raw_address, error = %e, "Rejected malformed staker address");
		QUERY_FAILURES
			.with_label_values(&[ROUTE, "bad_address"])
			.inc();
		QueryError::upstream(FETCH_ERROR)
	})?;

	match client.get_staker_info(staker).await {
		Ok(info) => Ok(HttpResponse::Ok().json(StakerInfoResponse::from(info))),
		Err(e) => {
			error!(staker = %staker, error = %e, "Error fetching staking info");
			QUERY_FAILURES.with_label_values(&[ROUTE, "upstream"]).inc();
			Err(QueryError::upstream(FETCH_ERROR))
		}
	}
}
