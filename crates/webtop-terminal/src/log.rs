//! Append-only output log of a terminal window.

/// What produced a log line. The UI styles `Stderr` and `TransportError`
/// lines as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `$ <command>` echo of a dispatched request.
    Echo,
    Stdout,
    Stderr,
    /// `[exit N]` trailer.
    Status,
    TransportError,
}

impl LineKind {
    pub fn is_error(self) -> bool {
        matches!(self, LineKind::Stderr | LineKind::TransportError)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LineKind,
    pub text: String,
}

/// Ordered sequence of rendered lines. Lines are never edited or removed.
#[derive(Debug, Default)]
pub struct TerminalLog {
    lines: Vec<LogLine>,
}

impl TerminalLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: LineKind, text: impl Into<String>) {
        self.lines.push(LogLine {
            kind,
            text: text.into(),
        });
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    pub fn last(&self) -> Option<&LogLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text rendering, one entry per line.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
