//! Server process configuration.

use std::net::SocketAddr;
use std::path::Path;

use arith_runtime::{ConfigError, LoggingConfig, load_layered};
use serde::{Deserialize, Serialize};

/// Environment prefix; nested keys use `__`, e.g. `ARITH_SERVER__LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "ARITH_SERVER__";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4040";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the gRPC server binds.
    pub listen_addr: String,
    /// Register the gRPC reflection service.
    pub reflection: bool,
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            reflection: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load defaults, then the optional YAML file, then `ARITH_SERVER__*`,
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
    /// Returns [`ConfigError::Invalid`] if a field is out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.socket_addr().map(|_| ())
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
