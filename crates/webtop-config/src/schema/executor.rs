//! Command executor configuration types.

use serde::{Deserialize, Serialize};

/// Settings for the server-side command executor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Wall-clock limit per command, in seconds.
    pub timeout_secs: u32,
    /// Shell program. Empty string means the platform default
    /// (`/bin/sh` on unix, `cmd.exe` on Windows).
    pub shell: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            shell: String::new(),
        }
    }
}
