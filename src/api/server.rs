//! API server module
//!
//! Builds the actix-web server hosting the query routes and the Prometheus
//! metrics endpoint. Clients are injected as shared `web::Data`; nothing is
//! constructed per request.

use actix_web::middleware::{Compress, NormalizePath};
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use std::sync::Arc;
use tracing::{error, info};

use crate::{
	api::{solana, staking},
	services::blockchain::{StakingQueryClient, TokenQueryClient},
	utils::metrics::gather_metrics,
};

/// Metrics endpoint handler
async fn metrics_handler() -> impl Responder {
	match gather_metrics() {
		Ok(buffer) => HttpResponse::Ok()
			.content_type("text/plain; version=0.0.4; charset=utf-8")
			.body(buffer),
		Err(e) => {
			error!("Error gathering metrics: {}", e);
			HttpResponse::InternalServerError().finish()
		}
	}
}

/// Creates the API server bound to `bind_address`.
///
/// The returned server future must be awaited (or spawned) by the caller;
/// binding errors are reported immediately.
pub fn create_api_server(
	bind_address: String,
	staking_client: Arc<dyn StakingQueryClient>,
	token_client: Arc<dyn TokenQueryClient>,
) -> std::io::Result<actix_web::dev::Server> {
	info!("Starting query API server on {}", bind_address);

	Ok(HttpServer::new(move || {
		App::new()
			.wrap(Compress::default())
			.wrap(NormalizePath::trim())
			.app_data(web::Data::new(staking_client.clone()))
			.app_data(web::Data::new(token_client.clone()))
			.route("/staking/{address}", web::get().to(staking::get_staking_info))
			.route(
				"/solana/token-supply",
				web::get().to(solana::get_token_supply),
			)
			.route(
				"/solana/token-balance/{address}",
				web::get().to(solana::get_token_balance),
			)
			.route("/metrics", web::get().to(metrics_handler))
	})
	.workers(2)
	.bind(bind_address)?
	.shutdown_timeout(5)
	.run())
}
