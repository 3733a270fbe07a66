//! Console output forwarded out of the preview frame.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Console method that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleLevel {
    Log,
    Info,
    Warn,
    Error,
    Debug,
}

impl ConsoleLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "log" => Some(ConsoleLevel::Log),
            "info" => Some(ConsoleLevel::Info),
            "warn" => Some(ConsoleLevel::Warn),
            "error" => Some(ConsoleLevel::Error),
            "debug" => Some(ConsoleLevel::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleLevel::Log => "log",
            ConsoleLevel::Info => "info",
            ConsoleLevel::Warn => "warn",
            ConsoleLevel::Error => "error",
            ConsoleLevel::Debug => "debug",
        }
    }
}

/// One line of console output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleEvent {
    pub level: ConsoleLevel,
    pub message: String,
}

impl ConsoleEvent {
    /// Split a forwarded `"[level] text"` line. Lines without a recognized
    /// level prefix are treated as `log`.
    pub fn from_line(line: &str) -> Self {
        let parsed = line.strip_prefix('[').and_then(|rest| {
            let (level, text) = rest.split_once(']')?;
            let level = ConsoleLevel::parse(level)?;
            Some((level, text.strip_prefix(' ').unwrap_or(text)))
        });

        match parsed {
            Some((level, text)) => Self {
                level,
                message: text.to_string(),
            },
            None => Self {
                level: ConsoleLevel::Log,
                message: line.to_string(),
            },
        }
    }

    /// Emit the event through `tracing` at the matching level.
    pub fn log(&self) {
        match self.level {
            ConsoleLevel::Error => tracing::error!(target: "preview", "{}", self.message),
            ConsoleLevel::Warn => tracing::warn!(target: "preview", "{}", self.message),
            ConsoleLevel::Debug => tracing::debug!(target: "preview", "{}", self.message),
            ConsoleLevel::Log | ConsoleLevel::Info => {
                tracing::info!(target: "preview", "{}", self.message)
            }
        }
    }
}

/// One-way bus carrying console events from connected previews to any
/// number of subscribers.
#[derive(Debug, Clone)]
pub struct ConsoleBus {
    sender: broadcast::Sender<ConsoleEvent>,
}

impl ConsoleBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(256);
        Self { sender }
    }

    pub fn publish(&self, event: ConsoleEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.sender.subscribe()
    }
}

impl Default for ConsoleBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Log every event published on `bus` until it closes.
pub async fn log_console_events(bus: ConsoleBus) {
    let mut rx = bus.subscribe();
    drop(bus);

    loop {
        match rx.recv().await {
            Ok(event) => event.log(),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} console events", skipped);
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
