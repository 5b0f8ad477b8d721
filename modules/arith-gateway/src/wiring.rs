//! Builds the gRPC client the handlers use.

use std::sync::Arc;

use arith_runtime::{Logger, log_info};
use arith_sdk::{ArithClient, ArithError, ArithGrpcClient};

use crate::config::RpcConfig;

/// Connect to the arith service described by `rpc`.
///
/// With `lazy_connect` the channel is created without dialing; otherwise an
/// unreachable endpoint fails here.
///
/// # Errors
/// Returns [`ArithError::Transport`] if the endpoint is invalid or, for an
/// eager connection, unreachable.
pub async fn connect_client(rpc: &RpcConfig, log: &Logger) -> Result<Arc<dyn ArithClient>, ArithError> {
    let cfg = rpc.client_config();
    let client = if rpc.lazy_connect {
        ArithGrpcClient::connect_lazy(rpc.endpoint.clone(), &cfg)?
    } else {
        ArithGrpcClient::connect(rpc.endpoint.clone(), &cfg).await?
    };
    log_info!(
        log,
        "arith client ready (endpoint: {}, lazy: {})",
        rpc.endpoint,
        rpc.lazy_connect
    );
    Ok(Arc::new(client))
}
