//! Domain service for arith
//!
//! Contains the core arithmetic. Results wrap on overflow (two's complement),
//! so neither operation can fail.

use arith_runtime::{Logger, log_debug};
use arith_sdk::CallContext;

/// Domain service that performs the arithmetic operations.
///
/// Stateless apart from the injected logger.
#[derive(Clone, Debug)]
pub struct Service {
    log: Logger,
}

impl Service {
    /// Create a new service writing to `log`.
    #[must_use]
    pub fn new(log: Logger) -> Self {
        Self { log }
    }

    /// Add two numbers and return the (wrapping) sum.
    #[must_use]
    pub fn add(&self, ctx: &CallContext, a: i64, b: i64) -> i64 {
        let log = self.scoped(ctx);
        log_debug!(log, "Server: add()...");
        let result = a.wrapping_add(b);
        log_debug!(log, "{a} + {b} = {result}");
        result
    }

    /// Multiply two numbers and return the (wrapping) product.
    #[must_use]
    pub fn multiply(&self, ctx: &CallContext, a: i64, b: i64) -> i64 {
        let log = self.scoped(ctx);
        log_debug!(log, "Server: multiply()...");
        let result = a.wrapping_mul(b);
        log_debug!(log, "{a} x {b} = {result}");
        result
    }

    fn scoped(&self, ctx: &CallContext) -> Logger {
        match ctx.request_id() {
            Some(id) => self.log.with_request_id(id),
            None => self.log.clone(),
        }
    }
}
