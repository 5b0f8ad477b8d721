//! gRPC client implementation of `ArithClient`

use std::time::Duration;

use async_trait::async_trait;
use tonic::transport::{Channel, Endpoint};

use crate::api::{ArithClient, ArithError};
use crate::context::CallContext;
use crate::proto::ArithRequest;
use crate::proto::arith_service_client::ArithServiceClient;

/// Transport settings for [`ArithGrpcClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrpcClientConfig {
    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,

    /// Per-call deadline. `None` leaves calls unbounded; cancellation still
    /// propagates when the caller drops the future.
    pub request_timeout: Option<Duration>,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

impl GrpcClientConfig {
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

fn build_endpoint(uri: String, cfg: &GrpcClientConfig) -> Result<Endpoint, ArithError> {
    let mut endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10));

    if let Some(timeout) = cfg.request_timeout {
        endpoint = endpoint.timeout(timeout);
    }

    Ok(endpoint)
}

/// gRPC client implementation of [`ArithClient`].
///
/// Holds one channel; every call clones the cheap client handle.
#[derive(Clone)]
pub struct ArithGrpcClient {
    inner: ArithServiceClient<Channel>,
}

impl ArithGrpcClient {
    /// Connect eagerly; fails if the endpoint is unreachable.
    ///
    /// # Errors
    /// Returns [`ArithError::Transport`] if the URI is invalid or the
    /// connection cannot be established.
    pub async fn connect(uri: impl Into<String>, cfg: &GrpcClientConfig) -> Result<Self, ArithError> {
        let channel = build_endpoint(uri.into(), cfg)?.connect().await?;
        Ok(Self::from_channel(channel))
    }

    /// Build a client whose channel connects on first use.
    ///
    /// # Errors
    /// Returns [`ArithError::Transport`] if the URI is invalid.
    pub fn connect_lazy(uri: impl Into<String>, cfg: &GrpcClientConfig) -> Result<Self, ArithError> {
        let channel = build_endpoint(uri.into(), cfg)?.connect_lazy();
        Ok(Self::from_channel(channel))
    }

    #[must_use]
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: ArithServiceClient::new(channel),
        }
    }

    fn request(ctx: &CallContext, a: i64, b: i64) -> Result<tonic::Request<ArithRequest>, ArithError> {
        let mut request = tonic::Request::new(ArithRequest { a, b });
        ctx.attach(request.metadata_mut())?;
        Ok(request)
    }
}

#[async_trait]
impl ArithClient for ArithGrpcClient {
    async fn add(&self, ctx: &CallContext, a: i64, b: i64) -> Result<i64, ArithError> {
        let mut client = self.inner.clone();
        let response = client.add(Self::request(ctx, a, b)?).await?;
        Ok(response.into_inner().result)
    }

    async fn multiply(&self, ctx: &CallContext, a: i64, b: i64) -> Result<i64, ArithError> {
        let mut client = self.inner.clone();
        let response = client.multiply(Self::request(ctx, a, b)?).await?;
        Ok(response.into_inner().result)
    }
}
