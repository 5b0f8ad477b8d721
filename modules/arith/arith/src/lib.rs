//! Arith Module
//!
//! gRPC service performing two-operand integer arithmetic.
//!
//! ## Architecture
//!
//! - `domain::Service` contains the arithmetic and its logging
//! - `api::grpc::ArithServiceImpl` adapts the generated tonic trait to `Service`
//! - `server::serve` wires the service (and optional reflection) onto a listener
//! - `config::ServerConfig` is the validated process configuration

pub mod api;
pub mod config;
pub mod domain;
pub mod server;

pub use api::grpc::ArithServiceImpl;
pub use config::ServerConfig;
pub use domain::Service;
