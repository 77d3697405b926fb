//! Wire protocol for the `/run` endpoint.
//!
//! The browser terminal POSTs a [`CommandRequest`] and receives exactly one
//! [`CommandResult`] back, or an [`ErrorBody`] with a 4xx status when the
//! request is rejected before execution.

use serde::{Deserialize, Serialize};

/// Path of the command execution endpoint.
pub const RUN_PATH: &str = "/run";

/// Exit code reported when a command is killed for exceeding its timeout.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Exit code reported when the shell could not be launched at all.
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 1;

/// Error message returned with HTTP 400 for a missing or blank `cmd`.
pub const NO_COMMAND_ERROR: &str = "no command provided";

/// A single command to run. `cmd` is always trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub cmd: String,
}

impl CommandRequest {
    /// Build a request from raw user input. Returns `None` for blank input.
    pub fn new(raw: &str) -> Option<Self> {
        let cmd = raw.trim();
        if cmd.is_empty() {
            None
        } else {
            Some(Self { cmd: cmd.to_string() })
        }
    }
}

/// Outcome of one command, timed out or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    #[serde(rename = "returncode")]
    pub exit_code: i32,
}

impl CommandResult {
    pub fn timed_out() -> Self {
        Self {
            stdout: String::new(),
            stderr: "Command timed out".into(),
            exit_code: TIMEOUT_EXIT_CODE,
        }
    }

    pub fn launch_failed(reason: impl std::fmt::Display) -> Self {
        Self {
            stdout: String::new(),
            stderr: format!("Execution error: {reason}"),
            exit_code: LAUNCH_FAILURE_EXIT_CODE,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.exit_code == TIMEOUT_EXIT_CODE
    }
}

/// JSON body of every non-success reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn no_command() -> Self {
        Self::new(NO_COMMAND_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_input() {
        let req = CommandRequest::new("  ls -la \n").unwrap();
        assert_eq!(req.cmd, "ls -la");
    }

    #[test]
    fn request_rejects_blank_input() {
        assert!(CommandRequest::new("").is_none());
        assert!(CommandRequest::new("   \t\n").is_none());
    }

    #[test]
    fn request_serializes_cmd_key() {
        let req = CommandRequest::new("echo hi").unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "cmd": "echo hi" }));
    }

    #[test]
    fn result_uses_returncode_key() {
        let result = CommandResult {
            stdout: "hello\n".into(),
            stderr: String::new(),
            exit_code: 0,
        };
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["returncode", "stderr", "stdout"]);
        assert_eq!(obj["returncode"], 0);
    }

    #[test]
    fn result_missing_field_is_rejected() {
        let parsed = serde_json::from_str::<CommandResult>(r#"{"stdout":"","stderr":""}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn timed_out_result() {
        let result = CommandResult::timed_out();
        assert!(result.stdout.is_empty());
        assert_eq!(result.exit_code, 124);
        assert!(result.is_timeout());
        assert!(result.stderr.contains("timed out"));
    }

    #[test]
    fn launch_failed_result() {
        let result = CommandResult::launch_failed("No such file or directory");
        assert_eq!(result.exit_code, 1);
        assert_eq!(result.stderr, "Execution error: No such file or directory");
        assert!(!result.is_timeout());
    }

    #[test]
    fn no_command_error_body() {
        let json = serde_json::to_value(ErrorBody::no_command()).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "no command provided" }));
    }
}
