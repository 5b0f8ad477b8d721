//! arith-server: the arith gRPC service as a standalone process.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;

use arith::{Service, ServerConfig, server};
use arith_runtime::{log_error, log_info, logging, shutdown_signal, to_yaml};

/// Arith gRPC server
#[derive(Parser)]
#[command(name = "arith-server")]
#[command(about = "gRPC service for integer addition and multiplication")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Layered config: defaults -> YAML (if provided) -> env (ARITH_SERVER__*)
    let config = ServerConfig::load(cli.config.as_deref()).inspect_err(|e| {
        log_error!(logging::global(), "Invalid configuration: {e}");
    })?;

    if cli.print_config {
        println!("Effective configuration:\n{}", to_yaml(&config)?);
        return Ok(());
    }

    let log = logging::configure(&config.logging);
    log_info!(log, "Start the service...");

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await.inspect_err(|e| {
        log_error!(log, "Failed to listen on {addr}: {e}");
    })?;

    let service = Arc::new(Service::new(log.clone()));
    server::serve(
        listener,
        service,
        config.reflection,
        &log,
        shutdown_signal(log.clone()),
    )
    .await
}
