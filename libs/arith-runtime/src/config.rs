//! Layered configuration loading.
//!
//! Layers, lowest priority first:
//! 1. defaults supplied by the caller
//! 2. a YAML file, when a path is given
//! 3. environment variables `<PREFIX><KEY>`, with `__` separating nested keys
//!    (e.g. `ARITH_GATEWAY__RPC__ENDPOINT`)

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file does not exist: {0}")]
    MissingFile(String),

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to render configuration: {0}")]
    Render(String),
}

/// Load `T` from defaults, an optional YAML file and the environment.
///
/// # Errors
/// Returns an error if the file does not exist or a layer cannot be
/// deserialized into `T`.
pub fn load_layered<T>(defaults: &T, path: Option<&Path>, env_prefix: &str) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned,
{
    let mut figment = Figment::from(Serialized::defaults(defaults));

    if let Some(path) = path {
        if !path.is_file() {
            return Err(ConfigError::MissingFile(path.display().to_string()));
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(env_prefix).split("__"))
        .extract()
        .map_err(|e| ConfigError::Load(Box::new(e)))
}

/// Render a configuration as YAML (for `--print-config`).
///
/// # Errors
/// Returns an error if the value cannot be serialized.
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String, ConfigError> {
    serde_saphyr::to_string(value).map_err(|e| ConfigError::Render(e.to_string()))
}
