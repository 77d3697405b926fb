//! Request/reply transport between a terminal session and the executor.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use webtop_common::protocol::RUN_PATH;
use webtop_common::{CommandRequest, CommandResult};
use webtop_config::schema::TerminalConfig;

/// Failure to obtain a [`CommandResult`] at all. Timeouts and launch
/// failures are not transport errors; they arrive as ordinary results.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("malformed reply: {0}")]
    Malformed(String),
}

impl TransportError {
    /// The line shown in the terminal log for this failure.
    pub fn render(&self) -> String {
        match self {
            TransportError::Status(code) => format!("(error) HTTP {code}"),
            TransportError::Network(msg) => format!("(network error) {msg}"),
            TransportError::Malformed(msg) => format!("(network error) malformed reply: {msg}"),
        }
    }
}

/// One synchronous exchange: a request goes out, exactly one result or
/// error comes back. Implementations never retry.
#[async_trait]
pub trait ExecutionTransport: Send + Sync {
    async fn execute(&self, request: &CommandRequest) -> Result<CommandResult, TransportError>;
}

/// `POST <base>/run` over HTTP with a JSON body.
pub struct HttpTransport {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeouts(base_url, Duration::from_secs(10), Duration::from_secs(60))
    }

    pub fn from_config(config: &TerminalConfig) -> Result<Self, TransportError> {
        Self::with_timeouts(
            &config.server_url,
            Duration::from_secs(u64::from(config.connect_timeout_secs)),
            Duration::from_secs(u64::from(config.request_timeout_secs)),
        )
    }

    pub fn with_timeouts(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;
        Ok(Self {
            endpoint: format!("{}{RUN_PATH}", base_url.trim_end_matches('/')),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ExecutionTransport for HttpTransport {
    async fn execute(&self, request: &CommandRequest) -> Result<CommandResult, TransportError> {
        debug!(endpoint = %self.endpoint, cmd = %request.cmd, "run request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<CommandResult>()
            .await
            .map_err(|e| TransportError::Malformed(e.to_string()))
    }
}
