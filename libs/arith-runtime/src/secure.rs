use std::fmt;

use secrecy::{ExposeSecret, SecretString};

/// Marker written in place of a [`Secure`] value.
pub const REDACTED: &str = "[REDACTED]";

/// A string that must never reach the log sink verbatim.
///
/// `Debug` and `Display` both print [`REDACTED`], whatever the log level or
/// whether logging is enabled at all. Use [`expose`](Self::expose) for
/// controlled access to the raw value. The backing buffer is zeroed on drop.
#[derive(Clone)]
pub struct Secure(SecretString);

impl Secure {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::from(value.into()))
    }

    /// Read-only access to the raw value.
    ///
    /// Callers must not log, store, or otherwise persist the returned slice.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl From<String> for Secure {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Secure {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Secure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for Secure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
