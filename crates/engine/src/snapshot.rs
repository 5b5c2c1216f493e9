use super::*;
use flippy_core::*;
use serde::Serialize;

/// What a player may see of one card.
///
/// Face-down cards carry no identity, so a rendered view can never leak
/// the layout of the board.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "identity", rename_all = "lowercase")]
pub enum View {
    Hidden,
    Revealed(Identity),
    Matched(Identity),
}

impl From<&Card> for View {
    fn from(card: &Card) -> Self {
        match card.status() {
            Status::FaceDown => Self::Hidden,
            Status::FaceUp => Self::Revealed(card.identity()),
            Status::Matched => Self::Matched(card.identity()),
        }
    }
}

/// Render-safe, immutable view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub epoch: Epoch,
    pub difficulty: Difficulty,
    pub moves: Moves,
    pub matches: usize,
    pub pairs: usize,
    pub elapsed: Seconds,
    pub complete: bool,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Points>,
    pub cards: Vec<View>,
}

impl Snapshot {
    pub fn rows(&self) -> impl Iterator<Item = &[View]> {
        self.cards.chunks(self.difficulty.cols())
    }
}

/// Final result of a session, announced exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub difficulty: Difficulty,
    pub moves: Moves,
    pub elapsed: Seconds,
    pub score: Points,
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cleared in {} moves and {}:{:02} for {} points",
            self.difficulty,
            self.moves,
            self.elapsed / 60,
            self.elapsed % 60,
            self.score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn hidden_cards_serialize_without_identity() {
        let json = serde_json::to_string(&View::Hidden).unwrap();
        assert_eq!(json, r#"{"state":"hidden"}"#);
        assert!(!json.contains("identity"));
    }
    #[test]
    fn revealed_cards_carry_identity() {
        let json = serde_json::to_string(&View::Revealed(3)).unwrap();
        assert_eq!(json, r#"{"state":"revealed","identity":3}"#);
    }
    #[test]
    fn completion_formats_clock() {
        let done = Completion {
            difficulty: Difficulty::Easy,
            moves: 20,
            elapsed: 75,
            score: 1725,
        };
        assert_eq!(
            done.to_string(),
            "easy cleared in 20 moves and 1:15 for 1725 points"
        );
    }
}
