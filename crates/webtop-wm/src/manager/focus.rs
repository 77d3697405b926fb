//! Focus and z-order handling for WindowManager.

use webtop_common::WindowId;

use super::WindowManager;

impl WindowManager {
    /// Raise `id` above every other window and make it the only focused one.
    ///
    /// Always consumes a fresh z-index, even when `id` is already on top.
    pub fn focus(&mut self, id: WindowId) -> bool {
        if !self.windows.contains_key(&id) {
            return false;
        }

        self.z_counter += 1;
        let z = self.z_counter;
        for window in self.windows.values_mut() {
            window.focused = window.id == id;
            if window.focused {
                window.z_index = z;
            }
        }
        true
    }

    /// Pointer pressed anywhere inside a window.
    pub fn pointer_down(&mut self, id: WindowId) -> bool {
        self.focus(id)
    }
}
