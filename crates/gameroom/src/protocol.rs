use super::*;

/// Errors that can occur during protocol operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    Malformed(String),
    InvalidCard(i64),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(s) => write!(f, "malformed message: {}", s),
            Self::InvalidCard(n) => write!(f, "invalid card: {}", n),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Handles Event to ServerMessage conversion and command parsing.
/// Centralizes the protocol layer between internal events and wire format.
pub struct Protocol;

impl Protocol {
    /// Converts an internal Event to a wire ServerMessage.
    pub fn encode(event: &Event) -> ServerMessage {
        match event {
            Event::Snapshot(snapshot) => ServerMessage::Snapshot(snapshot.clone()),
            Event::Complete(completion) => ServerMessage::Complete(*completion),
            Event::Saved(score) => ServerMessage::Saved { score: *score },
            Event::Notice(text) => ServerMessage::notice(text),
            Event::Rejected(reason) => ServerMessage::rejected(reason),
        }
    }
    /// Parses a client JSON message into a Command.
    /// Only player commands can come off the wire.
    pub fn decode(s: &str) -> Result<Command, ProtocolError> {
        match serde_json::from_str::<ClientMessage>(s) {
            Err(e) => Err(ProtocolError::Malformed(e.to_string())),
            Ok(ClientMessage::Click { card }) => usize::try_from(card)
                .map(Command::Click)
                .map_err(|_| ProtocolError::InvalidCard(card)),
            Ok(ClientMessage::NewGame { difficulty }) => Ok(Command::NewGame(difficulty)),
            Ok(ClientMessage::Leave) => Ok(Command::Leave),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flippy_engine::Deck;
    use flippy_engine::Difficulty;
    use flippy_engine::Engine;

    #[test]
    fn decode_commands() {
        assert_eq!(
            Protocol::decode(r#"{"type":"click","card":5}"#),
            Ok(Command::Click(5))
        );
        assert_eq!(
            Protocol::decode(r#"{"type":"new_game","difficulty":"hard"}"#),
            Ok(Command::NewGame(Some(Difficulty::Hard)))
        );
        assert_eq!(
            Protocol::decode(r#"{"type":"new_game"}"#),
            Ok(Command::NewGame(None))
        );
        assert_eq!(Protocol::decode(r#"{"type":"leave"}"#), Ok(Command::Leave));
    }
    #[test]
    fn negative_card_is_refused() {
        assert_eq!(
            Protocol::decode(r#"{"type":"click","card":-1}"#),
            Err(ProtocolError::InvalidCard(-1))
        );
    }
    #[test]
    fn garbage_is_malformed() {
        for raw in [
            r#"{"type":"click","card":"one"}"#,
            r#"{"type":"resolve"}"#,
            r#"{"type":"new_game","difficulty":"medium"}"#,
            "click 3",
        ] {
            assert!(matches!(
                Protocol::decode(raw),
                Err(ProtocolError::Malformed(_))
            ));
        }
    }
    #[test]
    fn snapshot_is_tagged() {
        let snapshot = Engine::from_deck(Deck::ordered(Difficulty::Easy)).snapshot();
        let json = Protocol::encode(&Event::Snapshot(snapshot)).to_json();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(value["type"], "snapshot");
        assert_eq!(value["difficulty"], "easy");
        assert_eq!(value["cards"].as_array().unwrap().len(), 16);
        assert_eq!(value["cards"][0]["state"], "hidden");
        assert!(value.get("score").is_none());
    }
    #[test]
    fn notices_carry_text() {
        let json = Protocol::encode(&Event::Notice("score not saved".into())).to_json();
        assert_eq!(json, r#"{"type":"notice","message":"score not saved"}"#);
    }
}
