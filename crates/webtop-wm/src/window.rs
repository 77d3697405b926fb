use webtop_common::{Point, WindowId};
use webtop_terminal::TerminalSession;

use crate::drag::DragState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Terminal,
    Document,
}

/// What a window hosts. Dropped together with the window on close.
#[derive(Debug)]
pub enum WindowContent {
    Terminal(TerminalSession),
    /// Static HTML body.
    Document(String),
}

impl WindowContent {
    pub fn terminal() -> Self {
        WindowContent::Terminal(TerminalSession::new())
    }

    pub fn kind(&self) -> WindowKind {
        match self {
            WindowContent::Terminal(_) => WindowKind::Terminal,
            WindowContent::Document(_) => WindowKind::Document,
        }
    }
}

/// A stacked, positioned, focusable surface. Only the [`WindowManager`]
/// mutates windows, which keeps focus and z-order consistent.
///
/// [`WindowManager`]: crate::WindowManager
#[derive(Debug)]
pub struct Window {
    pub(crate) id: WindowId,
    pub(crate) title: String,
    pub(crate) z_index: u64,
    pub(crate) position: Point,
    pub(crate) minimized: bool,
    pub(crate) fullscreen: bool,
    pub(crate) focused: bool,
    pub(crate) drag: DragState,
    pub(crate) content: WindowContent,
}

impl Window {
    pub(crate) fn new(id: WindowId, title: String, position: Point, content: WindowContent) -> Self {
        Self {
            id,
            title,
            z_index: 0,
            position,
            minimized: false,
            fullscreen: false,
            focused: false,
            drag: DragState::Idle,
            content,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn z_index(&self) -> u64 {
        self.z_index
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn kind(&self) -> WindowKind {
        self.content.kind()
    }

    pub fn content(&self) -> &WindowContent {
        &self.content
    }

    pub fn terminal(&self) -> Option<&TerminalSession> {
        match &self.content {
            WindowContent::Terminal(session) => Some(session),
            WindowContent::Document(_) => None,
        }
    }

    pub fn terminal_mut(&mut self) -> Option<&mut TerminalSession> {
        match &mut self.content {
            WindowContent::Terminal(session) => Some(session),
            WindowContent::Document(_) => None,
        }
    }
}
