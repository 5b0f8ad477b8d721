use std::future::Future;
use std::io;

use tokio::signal;

use crate::{Logger, log_info, log_warning};

/// Signals that can trigger shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigterm,
}

/// Future for graceful-shutdown hooks: resolves on Ctrl+C or SIGTERM.
///
/// If the signal handlers cannot be installed, waits for plain Ctrl+C.
pub async fn shutdown_signal(log: Logger) {
    let fallback = async {
        let _ = signal::ctrl_c().await;
    };
    await_shutdown(&log, wait_for_signal(), fallback).await;
}

async fn await_shutdown<P, F>(log: &Logger, primary: P, fallback: F)
where
    P: Future<Output = io::Result<ShutdownSignal>>,
    F: Future<Output = ()>,
{
    match primary.await {
        Ok(received) => log_info!(log, "Received {received:?}, initiating graceful shutdown"),
        Err(e) => {
            log_warning!(log, "shutdown: signal handler failed ({e}), falling back to ctrl_c()");
            fallback.await;
            log_info!(log, "Received CtrlC, initiating graceful shutdown");
        }
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<ShutdownSignal> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    tokio::select! {
        result = signal::ctrl_c() => result.map(|()| ShutdownSignal::CtrlC),
        _ = sigterm.recv() => Ok(ShutdownSignal::Sigterm),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<ShutdownSignal> {
    signal::ctrl_c().await.map(|()| ShutdownSignal::CtrlC)
}
