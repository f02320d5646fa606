//! Core services implementing the chain query functionality.
//!
//! Contains the service layer of the application:
//!
//! - `blockchain`: Chain clients and network transports

pub mod blockchain;
