//! Terminal windows for webtop.
//!
//! A [`TerminalSession`] turns typed input into [`CommandRequest`]s, hands
//! them to an [`ExecutionTransport`], and renders each reply into its
//! append-only [`TerminalLog`]. There is no PTY: every command is one
//! request and one reply.
//!
//! [`CommandRequest`]: webtop_common::CommandRequest

pub mod log;
pub mod session;
pub mod transport;

pub use log::{LineKind, LogLine, TerminalLog};
pub use session::{SessionState, TerminalSession};
pub use transport::{ExecutionTransport, HttpTransport, TransportError};
