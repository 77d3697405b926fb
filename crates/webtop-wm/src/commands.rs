use webtop_common::{Point, WindowId};

/// A discrete UI event aimed at the window manager.
#[derive(Debug, Clone, PartialEq)]
pub enum WindowCommand {
    Focus(WindowId),
    ToggleMinimize(WindowId),
    ToggleFullscreen(WindowId),
    Close(WindowId),
    /// Pointer pressed on a title bar at the given desktop position.
    BeginDrag(WindowId, Point),
    /// Pointer moved anywhere on the desktop.
    DragTo(Point),
    /// Pointer released or left the desktop.
    EndDrag,
}
