//! Per-window drag state machine.
//!
//! Pointer-down on a title bar enters `Dragging` with the pointer's offset
//! from the window's top-left corner; each pointer move places the window
//! at `pointer - offset`; pointer-up or pointer-leave returns to `Idle`.
//! Nothing about a drag outlives its release.

use webtop_common::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        offset: Point,
    },
}

impl DragState {
    /// Start a drag for a window whose top-left is at `origin`.
    pub fn begin(origin: Point, pointer: Point) -> Self {
        DragState::Dragging {
            offset: pointer - origin,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Where the window's top-left belongs for this pointer position, if a
    /// drag is in progress.
    pub fn target(&self, pointer: Point) -> Option<Point> {
        match self {
            DragState::Dragging { offset } => Some(pointer - *offset),
            DragState::Idle => None,
        }
    }
}
