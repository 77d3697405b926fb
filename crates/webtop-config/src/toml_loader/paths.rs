//! Where the webtop config file lives, and writing the default one.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;
use webtop_common::ConfigError;

use super::template::default_config_toml;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "WEBTOP_CONFIG";

/// `$WEBTOP_CONFIG` if set and non-empty, otherwise
/// `<config dir>/webtop/config.toml` (`~/.config/webtop/config.toml` on Linux).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    config_path_from(std::env::var_os(CONFIG_PATH_ENV), dirs::config_dir())
}

fn config_path_from(
    env_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config_dir
        .map(|dir| dir.join("webtop").join("config.toml"))
        .ok_or_else(|| {
            ConfigError::ParseError(format!(
                "no platform config directory; set ${CONFIG_PATH_ENV} to a config file"
            ))
        })
}

/// Write the commented default config to `path`, creating parent
/// directories as needed.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |what: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", target.display()))
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| write_error("create config directory", parent, e))?;
    }
    std::fs::write(path, default_config_toml())
        .map_err(|e| write_error("write default config to", path, e))?;

    info!("created default config at {}", path.display());
    Ok(())
}
