use super::*;
use flippy_core::Cell;

/// Result of comparing the two cards of a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Match,
    Mismatch,
}

/// How many cards are face-up and unresolved.
///
/// - `Idle`: nothing pending, the next click opens a round
/// - `OneFlipped`: one card pending, the next click closes the round
/// - `Resolving`: both cards face-up, outcome decided, input locked until
///   the reveal delay elapses
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    OneFlipped(Cell),
    Resolving { pair: (Cell, Cell), outcome: Outcome },
}

impl Phase {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Resolving { .. })
    }
    /// Cards currently face-up and unresolved.
    pub fn pending(&self) -> Vec<Cell> {
        match self {
            Self::Idle => vec![],
            Self::OneFlipped(a) => vec![*a],
            Self::Resolving { pair: (a, b), .. } => vec![*a, *b],
        }
    }
}

/// What a click did.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Flip {
    /// No-op: input locked, or the card was already face-up or matched.
    Ignored,
    /// Opened a round.
    First(Cell),
    /// Closed a round; the outcome waits for the reveal delay.
    Second { pair: (Cell, Cell), outcome: Outcome },
}

impl Flip {
    /// Whether the click turned a card face-up (and so costs a move).
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// State machine governing flips within a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluator {
    phase: Phase,
}

impl Evaluator {
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Handles a click on `id`. Out-of-range ids are errors; everything
    /// else the round cannot accept is [`Flip::Ignored`].
    pub fn click(&mut self, board: &mut Board, id: Cell) -> Result<Flip, EngineError> {
        let card = board.card(id).ok_or(EngineError::InvalidInput {
            card: id,
            cells: board.len(),
        })?;
        if self.phase.is_locked() || !card.is_face_down() {
            return Ok(Flip::Ignored);
        }
        let identity = card.identity();
        match self.phase {
            Phase::Idle => {
                board.set(id, Status::FaceUp)?;
                self.phase = Phase::OneFlipped(id);
                Ok(Flip::First(id))
            }
            Phase::OneFlipped(first) => {
                let outcome = board
                    .card(first)
                    .map(|c| c.identity() == identity)
                    .map(|same| if same { Outcome::Match } else { Outcome::Mismatch })
                    .ok_or(EngineError::InvalidInput {
                        card: first,
                        cells: board.len(),
                    })?;
                board.set(id, Status::FaceUp)?;
                let pair = (first, id);
                self.phase = Phase::Resolving { pair, outcome };
                Ok(Flip::Second { pair, outcome })
            }
            Phase::Resolving { .. } => Ok(Flip::Ignored),
        }
    }
    /// Applies the stored outcome of a closed round and unlocks input.
    /// Returns `None` when no round is waiting.
    pub fn resolve(&mut self, board: &mut Board) -> Result<Option<Outcome>, EngineError> {
        let Phase::Resolving { pair: (a, b), outcome } = self.phase else {
            return Ok(None);
        };
        let status = match outcome {
            Outcome::Match => Status::Matched,
            Outcome::Mismatch => Status::FaceDown,
        };
        board.set(a, status)?;
        board.set(b, status)?;
        self.phase = Phase::Idle;
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ordered deck: cards 2k and 2k+1 share identity k.
    fn setup() -> (Evaluator, Board) {
        (
            Evaluator::default(),
            Board::from(Deck::ordered(Difficulty::Easy).deal()),
        )
    }

    #[test]
    fn first_click_opens_round() {
        let (mut eval, mut board) = setup();
        assert_eq!(eval.click(&mut board, 5).unwrap(), Flip::First(5));
        assert_eq!(eval.phase(), Phase::OneFlipped(5));
        assert_eq!(board.card(5).unwrap().status(), Status::FaceUp);
    }

    #[test]
    fn same_card_twice_is_ignored() {
        let (mut eval, mut board) = setup();
        eval.click(&mut board, 0).unwrap();
        assert_eq!(eval.click(&mut board, 0).unwrap(), Flip::Ignored);
        assert_eq!(eval.phase(), Phase::OneFlipped(0));
    }

    #[test]
    fn second_click_locks_with_outcome() {
        let (mut eval, mut board) = setup();
        eval.click(&mut board, 0).unwrap();
        let flip = eval.click(&mut board, 2).unwrap();
        assert_eq!(
            flip,
            Flip::Second {
                pair: (0, 2),
                outcome: Outcome::Mismatch
            }
        );
        assert!(eval.phase().is_locked());
        assert_eq!(eval.click(&mut board, 4).unwrap(), Flip::Ignored);
        assert!(board.card(4).unwrap().is_face_down());
    }

    #[test]
    fn mismatch_flips_back() {
        let (mut eval, mut board) = setup();
        eval.click(&mut board, 0).unwrap();
        eval.click(&mut board, 2).unwrap();
        assert_eq!(eval.resolve(&mut board).unwrap(), Some(Outcome::Mismatch));
        assert_eq!(eval.phase(), Phase::Idle);
        assert!(board.card(0).unwrap().is_face_down());
        assert!(board.card(2).unwrap().is_face_down());
    }

    #[test]
    fn match_stays_up() {
        let (mut eval, mut board) = setup();
        eval.click(&mut board, 6).unwrap();
        eval.click(&mut board, 7).unwrap();
        assert_eq!(eval.resolve(&mut board).unwrap(), Some(Outcome::Match));
        assert!(board.card(6).unwrap().is_matched());
        assert!(board.card(7).unwrap().is_matched());
    }

    #[test]
    fn matched_cards_ignore_clicks() {
        let (mut eval, mut board) = setup();
        eval.click(&mut board, 0).unwrap();
        eval.click(&mut board, 1).unwrap();
        eval.resolve(&mut board).unwrap();
        assert_eq!(eval.click(&mut board, 1).unwrap(), Flip::Ignored);
        assert_eq!(eval.phase(), Phase::Idle);
    }

    #[test]
    fn resolve_without_round_does_nothing() {
        let (mut eval, mut board) = setup();
        let before = board.clone();
        assert_eq!(eval.resolve(&mut board).unwrap(), None);
        eval.click(&mut board, 3).unwrap();
        assert_eq!(eval.resolve(&mut board).unwrap(), None);
        assert_ne!(board, before);
        assert_eq!(eval.phase(), Phase::OneFlipped(3));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let (mut eval, mut board) = setup();
        let before = board.clone();
        assert!(eval.click(&mut board, 16).is_err());
        assert_eq!(board, before);
        assert_eq!(eval.phase(), Phase::Idle);
    }
}
