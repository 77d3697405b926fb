//! Window management for the webtop desktop.
//!
//! [`WindowManager`] owns every open window, their stacking order and
//! focus, and the per-window drag state machine. [`launcher`] maps desktop
//! icons to new windows, hosting a [`TerminalSession`] in terminal windows.
//!
//! [`TerminalSession`]: webtop_terminal::TerminalSession

pub mod commands;
pub mod drag;
pub mod launcher;
pub mod layout;
pub mod manager;
pub mod window;

pub use commands::WindowCommand;
pub use drag::DragState;
pub use launcher::{launch, AppKind};
pub use layout::Cascade;
pub use manager::WindowManager;
pub use window::{Window, WindowContent, WindowKind};
