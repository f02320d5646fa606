//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines per-route request and failure counters for the query endpoints.

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

lazy_static! {
	/// Global Prometheus registry.
	///
	/// This registry holds all metrics defined in this module and is used
	/// to gather metrics for exposure via the metrics endpoint.
	pub static ref REGISTRY: Registry = Registry::new();

	/// Counter for incoming query requests, labeled by route.
	pub static ref QUERY_REQUESTS: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("query_requests_total", "Total query requests received"),
			&["route"],
		)
		.unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	/// Counter for failed query requests, labeled by route and failure kind.
	///
	/// Failure kinds: "upstream" for RPC/provider failures surfaced as 500,
	/// "not_found" for the Solana zero-accounts 404, "bad_address" for
	/// unparseable path addresses.
	pub static ref QUERY_FAILURES: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("query_failures_total", "Total failed query requests"),
			&["route", "kind"],
		)
		.unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};
}

/// Gathers all registered metrics in the Prometheus text exposition format
pub fn gather_metrics() -> Result<Vec<u8>, prometheus::Error> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}
