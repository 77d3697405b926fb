//! webtop: serves the desktop page and executes terminal commands.
//!
//! Every command received on `POST /run` is run through the host shell.
//! Only run this in a trusted, single-user environment.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use webtop_config::WebtopConfig;
use webtop_server::{AppState, Server};

#[derive(Parser, Debug)]
#[command(name = "webtop", version, about = "Simulated desktop with a remote shell")]
struct Args {
    /// Port to listen on. Defaults to $PORT, then the config file, then 8080.
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory to serve static files from.
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log directive override (e.g. `webtop=debug`).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = match &args.config {
        Some(path) => webtop_config::load_config_from(path),
        None => webtop_config::load_config(),
    };
    let (mut config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => {
            let mut config = WebtopConfig::default();
            webtop_config::apply_env_overrides(&mut config);
            (config, Some(e))
        }
    };

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.directive());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::info!("webtop v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(root) = &args.root {
        config.server.static_root = root.display().to_string();
    }

    let addr = config.server.addr();
    let server = match Server::bind(&addr, AppState::from_config(&config)).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    tokio::select! {
        _ = server.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
        }
    }
    ExitCode::SUCCESS
}
