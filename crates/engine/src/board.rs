use super::*;
use flippy_core::Cell;

/// The cards of one session, with guarded status changes.
///
/// Holds no game logic: it only refuses transitions that [`Status::allows`]
/// rejects, so a Matched card can never be turned back over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
    pub fn card(&self, id: Cell) -> Option<&Card> {
        self.cards.get(id)
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn contains(&self, id: Cell) -> bool {
        id < self.cards.len()
    }
    /// Changes one card's status, or leaves the board untouched on error.
    pub fn set(&mut self, id: Cell, status: Status) -> Result<(), EngineError> {
        let cells = self.cards.len();
        let card = self
            .cards
            .get_mut(id)
            .ok_or(EngineError::InvalidInput { card: id, cells })?;
        if !card.status().allows(status) {
            return Err(EngineError::Transition {
                card: id,
                from: card.status(),
                to: status,
            });
        }
        card.set(status);
        Ok(())
    }
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }
    pub fn matched(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }
}

impl From<Vec<Card>> for Board {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}
