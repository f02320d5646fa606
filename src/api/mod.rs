//! HTTP API surface of the query service.
//!
//! Path-parameter REST-style GET routes that forward to the chain clients
//! and reshape the results into JSON with decimal-string amounts:
//!
//! - `GET /staking/{address}` - staking position for an address
//! - `GET /solana/token-supply` - total supply of the configured mint
//! - `GET /solana/token-balance/{address}` - mint balance for an owner
//! - `GET /metrics` - Prometheus metrics

mod error;
pub mod server;
pub mod solana;
pub mod staking;

pub use error::QueryError;
pub use server::create_api_server;
