//! Gateway process configuration.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use arith_runtime::{ConfigError, LoggingConfig, load_layered};
use arith_sdk::GrpcClientConfig;
use serde::{Deserialize, Serialize};

/// Environment prefix; nested keys use `__`, e.g. `ARITH_GATEWAY__RPC__ENDPOINT`.
pub const ENV_PREFIX: &str = "ARITH_GATEWAY__";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_RPC_ENDPOINT: &str = "http://127.0.0.1:4040";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Socket address the HTTP server binds.
    pub listen_addr: String,
    pub rpc: RpcConfig,
    pub logging: LoggingConfig,
}

/// Connection to the arith gRPC service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RpcConfig {
    /// `http://` or `https://` URI of the service.
    pub endpoint: String,
    pub connect_timeout_ms: u64,
    /// Per-call deadline; unset means no deadline.
    pub request_timeout_ms: Option<u64>,
    /// Defer connecting until the first call instead of failing at startup.
    pub lazy_connect: bool,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            rpc: RpcConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RPC_ENDPOINT.to_owned(),
            connect_timeout_ms: 10_000,
            request_timeout_ms: None,
            lazy_connect: false,
        }
    }
}

impl GatewayConfig {
    /// Load defaults, then the optional YAML file, then `ARITH_GATEWAY__*`,
    /// and validate the result.
    ///
    /// # Errors
    /// Returns an error if loading fails or the result is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = load_layered(&Self::default(), path, ENV_PREFIX)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr()?;
        self.rpc.validate()
    }

    /// Parsed listen address.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if `listen_addr` is not a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.listen_addr.parse().map_err(|e| {
            ConfigError::Invalid(format!("listen_addr {:?}: {e}", self.listen_addr))
        })
    }
}

impl RpcConfig {
    /// # Errors
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let has_scheme = ["http://", "https://"]
            .iter()
            .any(|scheme| self.endpoint.starts_with(scheme) && self.endpoint.len() > scheme.len());
        if !has_scheme {
            return Err(ConfigError::Invalid(format!(
                "rpc.endpoint {:?}: expected an http:// or https:// URI",
                self.endpoint
            )));
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "rpc.connect_timeout_ms must be greater than 0".to_owned(),
            ));
        }
        if self.request_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid(
                "rpc.request_timeout_ms must be greater than 0 when set".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn client_config(&self) -> GrpcClientConfig {
        let cfg = GrpcClientConfig::default()
            .with_connect_timeout(Duration::from_millis(self.connect_timeout_ms));
        match self.request_timeout_ms {
            Some(ms) => cfg.with_request_timeout(Duration::from_millis(ms)),
            None => cfg,
        }
    }
}
