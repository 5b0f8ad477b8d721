//! HTTP server wiring.

use std::future::Future;

use arith_runtime::log_info;
use tokio::net::TcpListener;

use crate::api::rest::{AppState, router};

/// Serve the gateway routes on `listener` until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the listener address cannot be read or the server
/// fails.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let log = state.log.clone();
    let addr = listener.local_addr()?;
    log_info!(log, "HTTP server bound on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    log_info!(log, "HTTP server stopped");
    Ok(())
}
