//! arith-gateway: HTTP front end for the arith gRPC service.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;

use arith_gateway::{AppState, GatewayConfig, server, wiring};
use arith_runtime::{log_error, log_info, logging, shutdown_signal, to_yaml};

/// Arith HTTP gateway
#[derive(Parser)]
#[command(name = "arith-gateway")]
#[command(about = "HTTP gateway translating /add and /mult into arith gRPC calls")]
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

    // Layered config: defaults -> YAML (if provided) -> env (ARITH_GATEWAY__*)
    let config = GatewayConfig::load(cli.config.as_deref()).inspect_err(|e| {
        log_error!(logging::global(), "Invalid configuration: {e}");
    })?;

    if cli.print_config {
        println!("Effective configuration:\n{}", to_yaml(&config)?);
        return Ok(());
    }

    let log = logging::configure(&config.logging);
    log_info!(log, "Start the client...");

    let client = wiring::connect_client(&config.rpc, &log)
        .await
        .inspect_err(|e| {
            log_error!(log, "Failed to connect to {}: {e}", config.rpc.endpoint);
        })?;

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await.inspect_err(|e| {
        log_error!(log, "Failed to run server: {e}");
    })?;

    let state = AppState::new(client, log.clone());
    server::serve(listener, state, shutdown_signal(log)).await
}
