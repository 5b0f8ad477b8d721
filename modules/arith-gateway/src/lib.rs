//! Arith Gateway
//!
//! HTTP front end for the arith gRPC service.
//!
//! ## Architecture
//!
//! - `domain` parses path operands and names the operations
//! - `api::rest` holds the axum handlers, DTOs and error mapping
//! - `wiring` builds the gRPC client from configuration
//! - Handlers reach the service through `Arc<dyn ArithClient>`, so tests can
//!   substitute an in-memory client

pub mod api;
pub mod config;
pub mod domain;
pub mod server;
pub mod wiring;

pub use api::rest::{AppState, GatewayError, router};
pub use config::{GatewayConfig, RpcConfig};
