//! The webtop HTTP server: runs `/run` commands and serves the desktop's
//! static files.

pub mod connection;
pub mod executor;
pub mod http;
pub mod routes;
pub mod server;
pub mod static_files;

pub use executor::CommandExecutor;
pub use server::{AppState, Server};
