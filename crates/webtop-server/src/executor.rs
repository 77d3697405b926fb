//! Runs one shell command to completion or timeout.
//!
//! Every call spawns an independent process through the host shell with
//! stdin disconnected and both output streams captured. The result is
//! always a [`CommandResult`]; timeouts and launch failures are encoded in
//! it rather than returned as errors.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, warn};
use webtop_common::CommandResult;
use webtop_config::schema::ExecutorConfig;

#[cfg(windows)]
const DEFAULT_SHELL: &str = "cmd";
#[cfg(not(windows))]
const DEFAULT_SHELL: &str = "/bin/sh";

#[cfg(windows)]
const SHELL_COMMAND_FLAG: &str = "/C";
#[cfg(not(windows))]
const SHELL_COMMAND_FLAG: &str = "-c";

#[derive(Debug, Clone)]
pub struct CommandExecutor {
    timeout: Duration,
    shell: String,
}

impl CommandExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            shell: DEFAULT_SHELL.to_string(),
        }
    }

    pub fn from_config(config: &ExecutorConfig) -> Self {
        let executor = Self::new(Duration::from_secs(u64::from(config.timeout_secs)));
        if config.shell.trim().is_empty() {
            executor
        } else {
            executor.with_shell(config.shell.trim())
        }
    }

    /// Use `shell` instead of the platform default.
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Run `cmd` and wait for it, killing it once the timeout elapses.
    ///
    /// On unix the shell leads its own process group, so a timeout takes
    /// down every pipeline stage and subshell it forked, not just the shell.
    pub async fn run(&self, cmd: &str) -> CommandResult {
        let mut command = Command::new(&self.shell);
        command
            .arg(SHELL_COMMAND_FLAG)
            .arg(cmd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        #[cfg(unix)]
        command.process_group(0);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!(shell = %self.shell, error = %e, "failed to launch command");
                return CommandResult::launch_failed(e);
            }
        };
        // Captured now: once the shell is reaped `id()` returns None, but
        // its background jobs still hold the group.
        let group = child.id();
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let finished = tokio::time::timeout(self.timeout, async {
            tokio::try_join!(child.wait(), read_pipe(stdout), read_pipe(stderr))
        })
        .await;

        match finished {
            Ok(Ok((status, stdout, stderr))) => {
                let result = CommandResult {
                    stdout: String::from_utf8_lossy(&stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&stderr).into_owned(),
                    exit_code: exit_code(status),
                };
                debug!(cmd, exit_code = result.exit_code, "command finished");
                result
            }
            Ok(Err(e)) => {
                warn!(cmd, error = %e, "failed to collect command output");
                terminate(&mut child, group).await;
                CommandResult::launch_failed(e)
            }
            Err(_) => {
                warn!(cmd, timeout = ?self.timeout, "command timed out");
                terminate(&mut child, group).await;
                CommandResult::timed_out()
            }
        }
    }
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// SIGKILL the command's process group, then kill and reap the shell.
async fn terminate(child: &mut Child, group: Option<u32>) {
    #[cfg(unix)]
    if let Some(pgid) = group.and_then(|pid| libc::pid_t::try_from(pid).ok()) {
        // SAFETY: killpg takes plain integers and touches no memory.
        if unsafe { libc::killpg(pgid, libc::SIGKILL) } != 0 {
            debug!(pgid, error = %std::io::Error::last_os_error(), "killpg failed");
        }
    }
    #[cfg(not(unix))]
    let _ = group;

    if let Err(e) = child.kill().await {
        debug!(error = %e, "shell already gone");
    }
}

/// Exit code, or `-signal` for a process killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}
