use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub bind: String,
    /// TCP port. `$PORT` and `--port` override this.
    pub port: u16,
    /// Directory that GET requests are served from.
    pub static_root: String,
    /// Largest request body accepted, in bytes.
    pub max_body_bytes: u32,
    /// Seconds a client gets to send its full request before the
    /// connection is dropped.
    pub read_timeout_secs: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 8080,
            static_root: ".".into(),
            max_body_bytes: 1024 * 1024,
            read_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// `bind:port`, ready for `TcpListener::bind`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}
