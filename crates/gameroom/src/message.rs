use flippy_core::*;
use flippy_engine::Completion;
use flippy_engine::Difficulty;
use flippy_engine::Snapshot;
use serde::Deserialize;
use serde::Serialize;

/// Messages sent from server to client over WebSocket.
/// Snapshots carry their session epoch so clients can drop stale frames.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection confirmation.
    Connected { table: String },
    /// Full render state.
    Snapshot(Snapshot),
    /// Final result of the session.
    Complete(Completion),
    /// Result stored.
    Saved { score: Points },
    /// Non-blocking information.
    Notice { message: String },
    /// Refused input.
    Rejected { reason: String },
}

impl ServerMessage {
    pub fn connected(table: &str) -> Self {
        Self::Connected {
            table: table.to_string(),
        }
    }
    pub fn notice(message: &str) -> Self {
        Self::Notice {
            message: message.to_string(),
        }
    }
    pub fn rejected(reason: &str) -> Self {
        Self::Rejected {
            reason: reason.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::error!("serialize server message: {}", e);
            String::from(r#"{"type":"notice","message":"internal error"}"#)
        })
    }
}

/// Messages sent from client to server over WebSocket.
///
/// Card ids are signed on the wire so negative ids can be refused with a
/// reason instead of a parse failure.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    Click {
        card: i64,
    },
    NewGame {
        #[serde(default)]
        difficulty: Option<Difficulty>,
    },
    Leave,
}
