//! Arith API trait and types
//!
//! Contract trait and types for the arith service.

use async_trait::async_trait;

use crate::CallContext;

/// Arith API trait
///
/// Two-operand integer arithmetic. Overflow wraps (two's complement).
#[async_trait]
pub trait ArithClient: Send + Sync {
    /// Add two numbers and return the sum.
    async fn add(&self, ctx: &CallContext, a: i64, b: i64) -> Result<i64, ArithError>;

    /// Multiply two numbers and return the product.
    async fn multiply(&self, ctx: &CallContext, a: i64, b: i64) -> Result<i64, ArithError>;
}

/// Error type for arith operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    /// The remote call completed with a non-OK status.
    #[error("rpc error: code = {code:?} desc = {message}")]
    Rpc { code: tonic::Code, message: String },

    #[error("gRPC transport error: {0}")]
    Transport(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<tonic::Status> for ArithError {
    fn from(status: tonic::Status) -> Self {
        Self::Rpc {
            code: status.code(),
            message: status.message().to_owned(),
        }
    }
}

impl From<tonic::transport::Error> for ArithError {
    fn from(err: tonic::transport::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
