//! Listener setup and the accept loop.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::{info, warn};
use webtop_common::WebtopError;
use webtop_config::WebtopConfig;

use crate::connection::handle_connection;
use crate::executor::CommandExecutor;

/// Everything a connection handler needs. Read-only once serving starts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub executor: CommandExecutor,
    pub static_root: PathBuf,
    pub max_body_bytes: usize,
    /// Deadline for receiving one complete request.
    pub read_timeout: Duration,
}

impl AppState {
    pub fn from_config(config: &WebtopConfig) -> Self {
        Self {
            executor: CommandExecutor::from_config(&config.executor),
            static_root: PathBuf::from(&config.server.static_root),
            max_body_bytes: config.server.max_body_bytes as usize,
            read_timeout: Duration::from_secs(u64::from(config.server.read_timeout_secs)),
        }
    }
}

pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
}

impl Server {
    pub async fn bind(addr: &str, state: AppState) -> webtop_common::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebtopError::Server(format!("failed to bind {addr}: {e}")))?;
        Ok(Self {
            listener,
            state: Arc::new(state),
        })
    }

    pub fn local_addr(&self) -> webtop_common::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever, one task per connection.
    pub async fn run(self) {
        if let Ok(addr) = self.listener.local_addr() {
            info!(
                "webtop listening on {addr} (serving files from {})",
                self.state.static_root.display()
            );
        }

        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    let state = Arc::clone(&self.state);
                    tokio::spawn(handle_connection(stream, peer, state));
                }
                Err(e) => {
                    warn!(error = %e, "TCP accept error");
                }
            }
        }
    }
}
