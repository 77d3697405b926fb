//! Command dispatch and terminal routing for WindowManager.

use tracing::debug;
use webtop_common::{CommandRequest, CommandResult, WindowId};
use webtop_terminal::TransportError;

use crate::commands::WindowCommand;

use super::WindowManager;

impl WindowManager {
    /// Execute a window command. Returns `true` if it changed anything.
    pub fn execute(&mut self, cmd: WindowCommand) -> bool {
        match cmd {
            WindowCommand::Focus(id) => self.focus(id),
            WindowCommand::ToggleMinimize(id) => self.toggle_minimize(id),
            WindowCommand::ToggleFullscreen(id) => self.toggle_fullscreen(id),
            WindowCommand::Close(id) => self.close(id),
            WindowCommand::BeginDrag(id, pointer) => self.begin_drag(id, pointer),
            WindowCommand::DragTo(pointer) => self.drag_to(pointer),
            WindowCommand::EndDrag => self.end_drag(),
        }
    }

    /// Hand typed input to the terminal hosted in `id`.
    ///
    /// Returns the request the caller must dispatch, if any.
    pub fn submit(&mut self, id: WindowId, input: &str) -> Option<CommandRequest> {
        self.terminal_mut(id)?.submit(input)
    }

    /// Route a transport completion to the terminal hosted in `id`.
    ///
    /// Replies for windows closed in the meantime are dropped. Returns the
    /// next queued request of that terminal, if any.
    pub fn deliver(
        &mut self,
        id: WindowId,
        outcome: Result<CommandResult, TransportError>,
    ) -> Option<CommandRequest> {
        match self.terminal_mut(id) {
            Some(session) => session.complete(outcome),
            None => {
                debug!(window = %id, "dropping reply for closed window");
                None
            }
        }
    }
}
