#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Shared runtime for the arith processes.
//!
//! ## Modules
//!
//! - [`logging`]: leveled console logging through an injectable [`Logger`],
//!   with the `log_debug!`/`log_info!`/`log_warning!`/`log_error!` macros
//! - [`secure`]: [`Secure`] values that always log as a redaction marker
//! - [`request_id`]: random request identifiers
//! - [`config`]: layered configuration loading (defaults, YAML, environment)
//! - [`signals`]: shutdown signal handling

pub mod config;
pub mod logging;
pub mod request_id;
pub mod secure;
pub mod signals;

pub use config::{ConfigError, load_layered, to_yaml};
pub use logging::{LogLevel, Logger, LoggingConfig};
pub use request_id::new_request_id;
pub use secure::Secure;
pub use signals::{ShutdownSignal, shutdown_signal};
