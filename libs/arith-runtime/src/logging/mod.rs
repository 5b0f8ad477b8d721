//! Leveled console logging.
//!
//! Components receive a [`Logger`] at construction time. The process-wide
//! slot behind [`configure`] / [`global`] is meant for the composition root
//! (`main`) only.
//!
//! Every emitted record is one line: `2024-01-31 12:00:00.123 [D] message`.
//! Call sites use the `log_*!` macros, e.g. `log_info!(log, "{a} + {b}")`.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use tracing::Dispatch;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

mod format;
mod macros;
mod sink;

pub use format::{LineFormat, TIMESTAMP_FORMAT};
pub use sink::MemorySink;

/// Severity of a log record, ordered from least to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// Parse a level name (`ERROR`, `WARNING`, `INFO`, `DEBUG`, any case).
    ///
    /// Unrecognized names fall back to [`LogLevel::Info`].
    #[must_use]
    pub fn parse_or_default(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Self::Error,
            "WARNING" => Self::Warning,
            "DEBUG" => Self::Debug,
            _ => Self::Info,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging section of a process configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Master switch. When off, nothing is written for any level.
    pub enabled: bool,
    /// Minimum severity name; unknown names mean `INFO`.
    pub level: String,
}

impl LoggingConfig {
    #[must_use]
    pub fn new(enabled: bool, level: impl Into<String>) -> Self {
        Self {
            enabled,
            level: level.into(),
        }
    }

    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        LogLevel::parse_or_default(&self.level)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(true, LogLevel::Debug.as_str())
    }
}

struct Inner {
    enabled: bool,
    min_level: LogLevel,
    dispatch: Dispatch,
}

/// Injectable logging context.
///
/// Cloning is cheap; clones share the same sink.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
    request_id: Option<Arc<str>>,
}

impl Logger {
    /// Logger writing to standard output.
    #[must_use]
    pub fn new(config: &LoggingConfig) -> Self {
        Self::with_writer(config, std::io::stdout)
    }

    /// Logger writing to an arbitrary sink.
    #[must_use]
    pub fn with_writer<W>(config: &LoggingConfig, writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_ansi(false)
            .with_writer(writer)
            .event_format(LineFormat)
            .finish();

        Self {
            inner: Arc::new(Inner {
                enabled: config.enabled,
                min_level: config.min_level(),
                dispatch: Dispatch::new(subscriber),
            }),
            request_id: None,
        }
    }

    /// Logger that never writes anything.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            inner: Arc::new(Inner {
                enabled: false,
                min_level: LogLevel::Error,
                dispatch: Dispatch::none(),
            }),
            request_id: None,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.inner.enabled
    }

    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        self.inner.min_level
    }

    /// Whether a record of `level` would be written.
    #[must_use]
    pub fn enabled_for(&self, level: LogLevel) -> bool {
        self.inner.enabled && level <= self.inner.min_level
    }

    /// Same sink, with every line prefixed by `[request_id]`.
    ///
    /// An empty id leaves the logger unchanged.
    #[must_use]
    pub fn with_request_id(&self, request_id: &str) -> Self {
        if request_id.is_empty() {
            return self.clone();
        }
        Self {
            inner: Arc::clone(&self.inner),
            request_id: Some(Arc::from(request_id)),
        }
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled_for(level) {
            return;
        }

        let line = Line {
            request_id: self.request_id.as_deref(),
            args,
        };

        tracing::dispatcher::with_default(&self.inner.dispatch, || match level {
            LogLevel::Error => tracing::error!("{line}"),
            LogLevel::Warning => tracing::warn!("{line}"),
            LogLevel::Info => tracing::info!("{line}"),
            LogLevel::Debug => tracing::debug!("{line}"),
        });
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, args);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, args);
    }

    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("enabled", &self.inner.enabled)
            .field("min_level", &self.inner.min_level)
            .field("request_id", &self.request_id)
            .finish_non_exhaustive()
    }
}

struct Line<'a> {
    request_id: Option<&'a str>,
    args: fmt::Arguments<'a>,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.request_id {
            write!(f, "[{id}] ")?;
        }
        fmt::Display::fmt(&self.args, f)
    }
}

static GLOBAL: LazyLock<ArcSwap<Logger>> =
    LazyLock::new(|| ArcSwap::from_pointee(Logger::new(&LoggingConfig::default())));
static CONFIGURED: AtomicBool = AtomicBool::new(false);

/// Rebind the process-wide logger.
///
/// May be called before anything has been logged and may be called again;
/// each call replaces the active logger. Returns the new logger.
pub fn configure(config: &LoggingConfig) -> Logger {
    let logger = Logger::new(config);
    GLOBAL.store(Arc::new(logger.clone()));
    CONFIGURED.store(true, Ordering::Release);
    logger
}

/// The process-wide logger. Before [`configure`] this is an enabled
/// `DEBUG` logger on stdout.
#[must_use]
pub fn global() -> Logger {
    Logger::clone(&GLOBAL.load())
}

#[must_use]
pub fn is_configured() -> bool {
    CONFIGURED.load(Ordering::Acquire)
}
