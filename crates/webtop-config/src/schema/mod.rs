//! Configuration schema types for webtop.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod executor;
mod logging;
mod server;
mod terminal;

pub use executor::*;
pub use logging::*;
pub use server::*;
pub use terminal::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for webtop.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WebtopConfig {
    pub server: ServerConfig,
    pub executor: ExecutorConfig,
    pub terminal: TerminalConfig,
    pub logging: LoggingConfig,
}
