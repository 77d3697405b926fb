use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WebtopError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("server error: {0}")]
    Server(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("server.port = 0".into());
        assert_eq!(err.to_string(), "config validation error: server.port = 0");
    }

    #[test]
    fn webtop_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: WebtopError = config_err.into();
        assert!(matches!(err, WebtopError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn webtop_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: WebtopError = io_err.into();
        assert!(matches!(err, WebtopError::Io(_)));
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn webtop_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: WebtopError = json_err.into();
        assert!(matches!(err, WebtopError::Json(_)));
    }

    #[test]
    fn webtop_error_server_display() {
        let err = WebtopError::Server("failed to bind 0.0.0.0:80: permission denied".into());
        assert_eq!(
            err.to_string(),
            "server error: failed to bind 0.0.0.0:80: permission denied"
        );
    }
}
