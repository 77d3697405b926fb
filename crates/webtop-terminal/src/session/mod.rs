//! Terminal session state machine.
//!
//! A `TerminalSession` is either idle or awaiting the reply to one request.
//! It owns the window's output log and never blocks: callers dispatch the
//! returned request through an `ExecutionTransport` and feed the outcome
//! back with `complete`.

mod operations;
mod types;

pub use types::*;
