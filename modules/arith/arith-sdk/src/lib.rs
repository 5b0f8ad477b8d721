//! Arith SDK
//!
//! This crate provides everything needed to consume the arith service:
//! - API trait (`ArithClient`)
//! - Error types (`ArithError`)
//! - Per-call context (`CallContext`) carried as gRPC metadata
//! - gRPC client (`ArithGrpcClient`)
//! - Proto stubs for the server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use arith_sdk::{ArithClient, ArithGrpcClient, CallContext, GrpcClientConfig};
//!
//! let client = ArithGrpcClient::connect("http://127.0.0.1:4040", &GrpcClientConfig::default()).await?;
//! let sum = client.add(&CallContext::default(), 3, 4).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::{ArithClient, ArithError};

mod context;
pub use context::CallContext;

// === GRPC CLIENT ===
mod client;
pub use client::{ArithGrpcClient, GrpcClientConfig};

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for `ArithService`
#[allow(clippy::pedantic)]
pub mod proto {
    tonic::include_proto!("arith.v1");
}

// Re-export proto types needed by server
pub use proto::arith_service_server::{ArithService, ArithServiceServer};
pub use proto::{ArithRequest, ArithResponse};

/// Fully qualified gRPC service name.
pub const SERVICE_NAME: &str = "arith.v1.ArithService";

/// Encoded file descriptor set of the arith protos, for server reflection.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("arith_descriptor");

/// Metadata key (and HTTP header) carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
