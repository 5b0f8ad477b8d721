//! gRPC server wiring.

use std::future::Future;
use std::sync::Arc;

use arith_runtime::{Logger, log_info};
use arith_sdk::{ArithServiceServer, FILE_DESCRIPTOR_SET};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;

use crate::api::grpc::ArithServiceImpl;
use crate::domain::Service;

/// Serve the arith service (and reflection, when enabled) on `listener`
/// until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the reflection service cannot be built or the
/// transport fails.
pub async fn serve<F>(
    listener: TcpListener,
    service: Arc<Service>,
    reflection: bool,
    log: &Logger,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send,
{
    let reflection_service = if reflection {
        Some(
            tonic_reflection::server::Builder::configure()
                .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
                .build_v1()?,
        )
    } else {
        None
    };

    let bound_addr = listener.local_addr()?;
    log_info!(log, "gRPC server listening on {bound_addr} (reflection: {reflection})");

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .add_service(ArithServiceServer::new(ArithServiceImpl::new(service)))
        .add_optional_service(reflection_service)
        .serve_with_incoming_shutdown(incoming, shutdown)
        .await?;

    log_info!(log, "gRPC server stopped");
    Ok(())
}
