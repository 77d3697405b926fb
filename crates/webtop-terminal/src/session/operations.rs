//! Submit and completion transitions for TerminalSession.

use tracing::{debug, warn};
use webtop_common::{CommandRequest, CommandResult};

use crate::log::LineKind;
use crate::transport::{ExecutionTransport, TransportError};

use super::{SessionState, TerminalSession};

impl TerminalSession {
    /// Accept a line of user input.
    ///
    /// Blank input is dropped without touching the log. Otherwise, when
    /// idle, the echo line is written and the request to dispatch is
    /// returned; when a reply is outstanding the request is queued and
    /// `None` is returned.
    pub fn submit(&mut self, input: &str) -> Option<CommandRequest> {
        let request = CommandRequest::new(input)?;
        match self.state {
            SessionState::Idle => Some(self.dispatch(request)),
            SessionState::AwaitingReply(_) => {
                debug!(cmd = %request.cmd, queued = self.queued.len() + 1, "queueing command");
                self.queued.push_back(request);
                None
            }
        }
    }

    /// Render the outcome of the in-flight request and move on.
    ///
    /// Returns the next queued request, already echoed, which the caller
    /// must hand to the transport. A completion that arrives while idle is
    /// ignored.
    pub fn complete(
        &mut self,
        outcome: Result<CommandResult, TransportError>,
    ) -> Option<CommandRequest> {
        if self.is_idle() {
            warn!("completion received with no request in flight");
            return None;
        }

        match outcome {
            Ok(result) => self.render_result(&result),
            Err(e) => self.log.push(LineKind::TransportError, e.render()),
        }

        self.state = SessionState::Idle;
        let next = self.queued.pop_front()?;
        Some(self.dispatch(next))
    }

    /// Submit `input` and drive `transport` until the session is idle again.
    pub async fn run<T>(&mut self, input: &str, transport: &T)
    where
        T: ExecutionTransport + ?Sized,
    {
        let mut next = self.submit(input);
        while let Some(request) = next {
            let outcome = transport.execute(&request).await;
            next = self.complete(outcome);
        }
    }

    fn dispatch(&mut self, request: CommandRequest) -> CommandRequest {
        self.log.push(LineKind::Echo, format!("$ {}", request.cmd));
        self.state = SessionState::AwaitingReply(request.clone());
        request
    }

    fn render_result(&mut self, result: &CommandResult) {
        if !result.stdout.is_empty() {
            self.log.push(LineKind::Stdout, strip_final_newline(&result.stdout));
        }
        if !result.stderr.is_empty() {
            self.log.push(LineKind::Stderr, strip_final_newline(&result.stderr));
        }
        self.log
            .push(LineKind::Status, format!("[exit {}]", result.exit_code));
    }
}

fn strip_final_newline(text: &str) -> &str {
    let text = text.strip_suffix('\n').unwrap_or(text);
    text.strip_suffix('\r').unwrap_or(text)
}
