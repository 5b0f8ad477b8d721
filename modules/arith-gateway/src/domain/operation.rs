use arith_sdk::{ArithClient, ArithError, CallContext};

/// Operations exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    /// Short name used in log lines (`Client: mult()...`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Multiply => "mult",
        }
    }

    /// Run the operation against the service.
    ///
    /// # Errors
    /// Propagates the client's [`ArithError`].
    pub async fn invoke(
        self,
        client: &dyn ArithClient,
        ctx: &CallContext,
        a: i64,
        b: i64,
    ) -> Result<i64, ArithError> {
        match self {
            Self::Add => client.add(ctx, a, b).await,
            Self::Multiply => client.multiply(ctx, a, b).await,
        }
    }
}
