//! API error responses.
//!
//! Maps the internal error taxonomy to HTTP responses. Upstream RPC failures
//! surface as a generic 500 with a fixed per-route message so no internal
//! detail leaks to callers; the Solana zero-accounts case is a distinct 404.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error as ThisError;

/// Error type returned by the query handlers.
///
/// The `Display` value is the public error message; the internal cause is
/// logged at the handler boundary before this type is constructed.
#[derive(Debug, ThisError)]
pub enum QueryError {
	/// No matching entity for the request; rendered as 404
	#[error("{0}")]
	NotFound(String),

	/// Upstream RPC failure or unusable request; rendered as generic 500
	#[error("{0}")]
	Upstream(String),
}

impl QueryError {
	pub fn not_found(message: impl Into<String>) -> Self {
		Self::NotFound(message.into())
	}

	pub fn upstream(message: impl Into<String>) -> Self {
		Self::Upstream(message.into())
	}
}

impl ResponseError for QueryError {
	fn status_code(&self) -> StatusCode {
		match self {
			Self::NotFound(_) => StatusCode::NOT_FOUND,
			Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
	}
}
