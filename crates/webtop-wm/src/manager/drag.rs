//! Pointer-driven dragging for WindowManager.

use webtop_common::{Point, WindowId};

use crate::drag::DragState;

use super::WindowManager;

impl WindowManager {
    /// Pointer pressed on `id`'s title bar: start dragging and raise it.
    pub fn begin_drag(&mut self, id: WindowId, pointer: Point) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        window.drag = DragState::begin(window.position, pointer);
        self.focus(id)
    }

    /// Pointer moved. Returns whether any window moved.
    pub fn drag_to(&mut self, pointer: Point) -> bool {
        let mut moved = false;
        for window in self.windows.values_mut() {
            if let Some(target) = window.drag.target(pointer) {
                window.position = target;
                moved = true;
            }
        }
        moved
    }

    /// Pointer released or left the desktop. Returns whether a drag ended.
    pub fn end_drag(&mut self) -> bool {
        let mut ended = false;
        for window in self.windows.values_mut() {
            if window.drag.is_dragging() {
                window.drag = DragState::Idle;
                ended = true;
            }
        }
        ended
    }

    pub fn dragging_id(&self) -> Option<WindowId> {
        self.windows
            .values()
            .find(|w| w.drag.is_dragging())
            .map(|w| w.id)
    }
}
