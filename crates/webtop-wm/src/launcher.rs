//! Desktop icons to windows.
//!
//! "Command Prompt" and "Terminal" open a window hosting a fresh
//! [`TerminalSession`](webtop_terminal::TerminalSession); every other app
//! gets a placeholder document naming it.

use tracing::info;
use webtop_common::WindowId;

use crate::manager::WindowManager;
use crate::window::WindowContent;

/// Title given to every terminal window.
pub const TERMINAL_TITLE: &str = "Terminal";

const FALLBACK_APP_NAME: &str = "App";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppKind {
    Terminal,
    /// Placeholder window for the named app.
    Document(String),
}

impl AppKind {
    pub fn from_app_name(name: &str) -> Self {
        match name.trim() {
            "Command Prompt" | "Terminal" => AppKind::Terminal,
            "" => AppKind::Document(FALLBACK_APP_NAME.to_string()),
            other => AppKind::Document(other.to_string()),
        }
    }
}

/// Open the window behind a desktop icon and return its id.
pub fn launch(manager: &mut WindowManager, app_name: &str) -> WindowId {
    let id = match AppKind::from_app_name(app_name) {
        AppKind::Terminal => manager.open(TERMINAL_TITLE, WindowContent::terminal()),
        AppKind::Document(name) => {
            let body = placeholder_html(&name);
            manager.open(name, WindowContent::Document(body))
        }
    };
    info!(app = app_name, window = %id, "launched");
    id
}

/// Body of a non-terminal window.
pub fn placeholder_html(name: &str) -> String {
    let name = escape_html(name);
    format!(
        "<div style=\"padding:12px;font-size:14px\"><h3>{name}</h3><p>This is a fake {name} window.</p></div>"
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
