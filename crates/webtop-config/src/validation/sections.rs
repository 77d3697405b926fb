//! Validation for the server, executor, and terminal sections.

use crate::schema::WebtopConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate server constraints.
pub(crate) fn validate_server(errors: &mut Vec<String>, config: &WebtopConfig) {
    validate_not_blank(errors, "server.bind", &config.server.bind);
    validate_not_blank(errors, "server.static_root", &config.server.static_root);
    validate_range(
        errors,
        "server.max_body_bytes",
        config.server.max_body_bytes,
        1024,
        64 * 1024 * 1024,
    );
    validate_range(
        errors,
        "server.read_timeout_secs",
        config.server.read_timeout_secs,
        1,
        3600,
    );
}

/// Validate executor constraints.
pub(crate) fn validate_executor(errors: &mut Vec<String>, config: &WebtopConfig) {
    validate_range(
        errors,
        "executor.timeout_secs",
        config.executor.timeout_secs,
        1,
        3600,
    );
}

/// Validate terminal client constraints.
pub(crate) fn validate_terminal(errors: &mut Vec<String>, config: &WebtopConfig) {
    let terminal = &config.terminal;
    if !(terminal.server_url.starts_with("http://") || terminal.server_url.starts_with("https://"))
    {
        errors.push(format!(
            "terminal.server_url = {:?} must start with http:// or https://",
            terminal.server_url
        ));
    }
    validate_range(
        errors,
        "terminal.connect_timeout_secs",
        terminal.connect_timeout_secs,
        1,
        120,
    );
    if terminal.request_timeout_secs <= config.executor.timeout_secs {
        errors.push(format!(
            "terminal.request_timeout_secs = {} must exceed executor.timeout_secs = {}",
            terminal.request_timeout_secs, config.executor.timeout_secs
        ));
    }
}
