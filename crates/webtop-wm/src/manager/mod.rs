//! The WindowManager coordinates windows, z-order, focus, and dragging.

mod dispatch;
mod drag;
mod focus;
mod lifecycle;
mod types;

pub use types::*;
