//! Development server for glimpse previews.
//!
//! Watches a project directory, re-bundles on change, serves the preview in a
//! sandboxed frame and pushes reloads over a WebSocket. Console output from
//! the preview comes back over the same socket onto a [`ConsoleBus`].

pub mod console;
pub mod host;
pub mod server;
pub mod watcher;
pub mod websocket;

pub use console::{ConsoleBus, ConsoleEvent, ConsoleLevel};
pub use server::{router, DevServer, DevServerConfig, ServerError, ServerState};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ClientMessage, ReloadHub, ServerMessage};
