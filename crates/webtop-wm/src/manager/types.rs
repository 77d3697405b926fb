//! Core types and constructors for WindowManager.

use std::collections::BTreeMap;

use webtop_common::WindowId;
use webtop_terminal::TerminalSession;

use crate::layout::Cascade;
use crate::window::Window;

/// z-index handed out before the first focus event.
pub const BASE_Z_INDEX: u64 = 200;

/// Owns every open window, the z-order counter, and the id counter.
///
/// All mutation happens from one event-dispatch thread, so the counters
/// need no synchronisation. Operations on an unknown or closed id are
/// silent no-ops reported through a `false`/`None` return.
pub struct WindowManager {
    /// Open windows keyed by id (creation order).
    pub(super) windows: BTreeMap<WindowId, Window>,
    /// Last z-index handed out; strictly increasing.
    pub(super) z_counter: u64,
    /// Windows opened so far; the next id is this plus one.
    pub(super) opened: u32,
    pub(super) cascade: Cascade,
}

impl WindowManager {
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            z_counter: BASE_Z_INDEX,
            opened: 0,
            cascade: Cascade::default(),
        }
    }

    /// Create with a custom cascade for new windows.
    pub fn with_cascade(cascade: Cascade) -> Self {
        let mut mgr = Self::new();
        mgr.cascade = cascade;
        mgr
    }

    // -- Accessors --

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    pub fn window_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.get_mut(&id)
    }

    /// Open windows in creation order.
    pub fn windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.values()
    }

    pub fn focused_id(&self) -> Option<WindowId> {
        self.windows.values().find(|w| w.focused).map(|w| w.id)
    }

    /// Window ids from bottom to top, i.e. in paint order.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut ordered: Vec<&Window> = self.windows.values().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered.into_iter().map(|w| w.id).collect()
    }

    pub fn topmost(&self) -> Option<WindowId> {
        self.windows.values().max_by_key(|w| w.z_index).map(|w| w.id)
    }

    pub fn terminal(&self, id: WindowId) -> Option<&TerminalSession> {
        self.windows.get(&id)?.terminal()
    }

    pub fn terminal_mut(&mut self, id: WindowId) -> Option<&mut TerminalSession> {
        self.windows.get_mut(&id)?.terminal_mut()
    }
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}
