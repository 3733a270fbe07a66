//! WebSocket messages and the reload broadcast hub.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages sent from the server to host pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// A fresh preview document is available
    Reload,

    /// Connection established
    Connected,
}

/// Messages sent from host pages to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Console output relayed from the preview frame
    Console {
        /// Text formatted as `[level] args...`
        message: String,
    },
}

impl ClientMessage {
    /// Parse a text frame; unknown or malformed frames yield `None`.
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}

/// Hub for broadcasting server messages to all connected host pages.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ServerMessage>,
}

impl ReloadHub {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(16);
        Self { sender }
    }

    /// Send a message to every connected page.
    pub fn send(&self, msg: ServerMessage) {
        // No receivers is fine
        let _ = self.sender.send(msg);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerMessage> {
        self.sender.subscribe()
    }

    /// Number of connected pages.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hub_broadcasts_messages() {
        let hub = ReloadHub::new();
        let mut rx = hub.subscribe();

        hub.send(ServerMessage::Reload);

        match rx.try_recv() {
            Ok(ServerMessage::Reload) => {}
            other => panic!("Expected Reload message, got {:?}", other),
        }
        assert_eq!(hub.subscriber_count(), 1);
    }

    #[test]
    fn serializes_server_messages() {
        assert_eq!(
            serde_json::to_string(&ServerMessage::Reload).unwrap(),
            r#"{"type":"reload"}"#
        );
        assert_eq!(
            serde_json::to_string(&ServerMessage::Connected).unwrap(),
            r#"{"type":"connected"}"#
        );
    }

    #[test]
    fn parses_console_frames() {
        let msg = ClientMessage::parse(r#"{"type":"console","message":"[warn] careful"}"#);

        assert_eq!(
            msg,
            Some(ClientMessage::Console {
                message: "[warn] careful".to_string()
            })
        );
        assert_eq!(ClientMessage::parse(r#"{"type":"other"}"#), None);
        assert_eq!(ClientMessage::parse("not json"), None);
    }
}
