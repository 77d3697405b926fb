use serde::{Deserialize, Serialize};

/// Client-side settings for terminal windows talking to the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Base URL of the webtop server; `/run` is appended.
    pub server_url: String,
    /// Connection establishment limit, in seconds.
    pub connect_timeout_secs: u32,
    /// Whole-request limit, in seconds. Must outlast the executor timeout,
    /// otherwise slow commands surface as network errors instead of 124.
    pub request_timeout_secs: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            connect_timeout_secs: 10,
            request_timeout_secs: 60,
        }
    }
}
