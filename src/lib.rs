//! Read-only blockchain query service.
//!
//! This library exposes a small HTTP surface that forwards address and token
//! queries to an Ethereum (Sepolia) or Solana JSON-RPC endpoint and reshapes
//! the response into JSON with decimal-string amounts. It includes:
//!
//! - Environment-driven configuration loaded once at startup
//! - Chain clients with trait seams for dependency injection
//! - A single-endpoint JSON-RPC HTTP transport per chain
//! - actix-web handlers mapping upstream failures to fixed error payloads
//!
//! # Module Structure
//!
//! - `bootstrap`: Constructs configuration and clients before serving
//! - `models`: Configuration and typed RPC response models
//! - `services`: Chain clients and transports
//! - `api`: HTTP handlers and server factory
//! - `utils`: Logging and metrics utilities

pub mod api;
pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
