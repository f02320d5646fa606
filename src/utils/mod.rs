//! Utility modules for common functionality.
//!
//! - logging: Logging setup and error context utilities
//! - metrics: Prometheus metrics for the query endpoints
//! - parsing: Address parsing helpers

pub mod logging;
pub mod metrics;
pub mod parsing;

pub use parsing::*;
