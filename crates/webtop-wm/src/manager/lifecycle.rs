//! Open, minimize, fullscreen, and close operations on the WindowManager.

use tracing::debug;
use webtop_common::{Point, WindowId};

use crate::window::{Window, WindowContent};

use super::WindowManager;

impl WindowManager {
    /// Open a new focused window at the next cascade position.
    pub fn open(&mut self, title: impl Into<String>, content: WindowContent) -> WindowId {
        self.opened += 1;
        let id = WindowId(self.opened);
        let position = self.cascade.position_for(self.opened);

        let window = Window::new(id, title.into(), position, content);
        debug!(window = %id, title = %window.title, kind = ?window.kind(), "open");
        self.windows.insert(id, window);
        self.focus(id);
        id
    }

    /// Flip minimized. Restoring a window brings it to the front.
    pub fn toggle_minimize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        window.minimized = !window.minimized;
        if !window.minimized {
            self.focus(id);
        }
        true
    }

    /// Flip fullscreen and raise the window. Entering fullscreen moves it
    /// to the origin; leaving does not restore the previous position.
    pub fn toggle_fullscreen(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        window.fullscreen = !window.fullscreen;
        if window.fullscreen {
            window.position = Point::ORIGIN;
        }
        self.focus(id);
        true
    }

    /// Remove a window and drop its content. Other windows keep their
    /// z-order and focus.
    pub fn close(&mut self, id: WindowId) -> bool {
        match self.windows.remove(&id) {
            Some(window) => {
                debug!(window = %id, title = %window.title, "close");
                true
            }
            None => false,
        }
    }
}
