//! Core types and constructors for TerminalSession.

use std::collections::VecDeque;

use webtop_common::CommandRequest;

use crate::log::TerminalLog;

/// Whether a request is currently in flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingReply(CommandRequest),
}

/// View-model of one terminal window.
///
/// At most one request is in flight per session. Input submitted while a
/// reply is outstanding is queued and dispatched in submission order, so
/// the log always reads as echo, output, status for each command in turn.
#[derive(Debug, Default)]
pub struct TerminalSession {
    pub(super) log: TerminalLog,
    pub(super) state: SessionState,
    pub(super) queued: VecDeque<CommandRequest>,
}

impl TerminalSession {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Accessors --

    pub fn log(&self) -> &TerminalLog {
        &self.log
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }

    /// The request whose reply is outstanding, if any.
    pub fn in_flight(&self) -> Option<&CommandRequest> {
        match &self.state {
            SessionState::AwaitingReply(request) => Some(request),
            SessionState::Idle => None,
        }
    }

    /// Requests waiting behind the in-flight one.
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }
}
