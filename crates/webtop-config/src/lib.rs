//! Webtop configuration system.
//!
//! TOML-based configuration with validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use webtop_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{WebtopConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use tracing::warn;
use webtop_common::ConfigError;

/// Environment variable that overrides `[server] port`.
pub const PORT_ENV: &str = "PORT";

/// Load config from the platform default path, then apply environment
/// overrides and validate the result.
pub fn load_config() -> Result<WebtopConfig, ConfigError> {
    let mut config = toml_loader::load_default()?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Same as [`load_config`] but reads an explicit file instead of the default.
pub fn load_config_from(path: &Path) -> Result<WebtopConfig, ConfigError> {
    let mut config = toml_loader::load_from_path(path)?;
    apply_env_overrides(&mut config);
    validation::validate(&config)?;
    Ok(config)
}

/// Apply `$PORT` on top of whatever the file said.
pub fn apply_env_overrides(config: &mut WebtopConfig) {
    let port = std::env::var(PORT_ENV).ok();
    apply_port_override(config, port.as_deref());
}

fn apply_port_override(config: &mut WebtopConfig, value: Option<&str>) {
    let Some(raw) = value else {
        return;
    };
    match raw.trim().parse::<u16>() {
        Ok(port) => config.server.port = port,
        Err(e) => warn!("ignoring ${PORT_ENV}={raw:?}: {e}"),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WebtopConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = WebtopConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"server\""));
        assert!(json.contains("\"executor\""));
        assert!(json.contains("\"terminal\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn port_override_applies_valid_value() {
        let mut config = WebtopConfig::default();
        apply_port_override(&mut config, Some(" 9090 "));
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn port_override_ignores_garbage() {
        let mut config = WebtopConfig::default();
        apply_port_override(&mut config, Some("not-a-port"));
        assert_eq!(config.server.port, 8080);
        apply_port_override(&mut config, Some("70000"));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn port_override_absent_keeps_file_value() {
        let mut config = WebtopConfig::default();
        config.server.port = 3000;
        apply_port_override(&mut config, None);
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = WebtopConfig::default();
        let json = config_to_json(&config);
        let parsed: WebtopConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.server.port, 8080);
        assert_eq!(parsed.executor.timeout_secs, 30);
    }
}
