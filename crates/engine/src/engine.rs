use super::*;
use flippy_core::*;
use std::time::Duration;

/// A scheduled resolution.
///
/// Issued by the click that closes a round; the host hands it back through
/// [`Engine::resolve`] once `delay` has elapsed. Tickets from an earlier
/// session are refused, however late they arrive.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Ticket {
    epoch: Epoch,
    delay: Duration,
}

impl Ticket {
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// What a click did to the session.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Click {
    /// Nothing changed and no move was spent.
    Ignored,
    /// A card turned face-up.
    Flipped(Cell),
    /// The second card of a round turned face-up; resolve after the delay.
    Scheduled(Ticket),
}

impl Click {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Result of applying a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub outcome: Outcome,
    /// Present only on the resolution that clears the board.
    pub completion: Option<Completion>,
}

/// One memory game session.
///
/// Owns the board, the round state machine, and the counters. All input is
/// synchronous; the reveal delay and the game clock are driven by the host
/// through [`Ticket`]s and [`Engine::tick`], each tagged with the session
/// epoch so events from a replaced session are no-ops.
#[derive(Debug, Clone)]
pub struct Engine {
    epoch: Epoch,
    difficulty: Difficulty,
    board: Board,
    evaluator: Evaluator,
    tally: Tally,
    announced: bool,
    delay: Duration,
}

impl Engine {
    /// Fresh shuffled session.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::from_deck(Deck::ordered(difficulty).shuffle(&mut rand::rng()))
    }
    /// Session over a caller-arranged deck.
    pub fn from_deck(deck: Deck) -> Self {
        let difficulty = deck.difficulty();
        Self {
            epoch: 0,
            difficulty,
            board: Board::from(deck.deal()),
            evaluator: Evaluator::default(),
            tally: Tally::new(difficulty.pairs()),
            announced: false,
            delay: REVEAL_DELAY,
        }
    }
    /// Overrides the reveal delay stamped on tickets.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Engine {
    /// Discards the current session and deals a fresh shuffle.
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.restart(Deck::ordered(difficulty).shuffle(&mut rand::rng()));
    }
    /// Discards the current session in favour of `deck`.
    /// Pending tickets and ticks of the old session become stale.
    pub fn restart(&mut self, deck: Deck) {
        let epoch = self.epoch + 1;
        let delay = self.delay;
        *self = Self::from_deck(deck).with_delay(delay);
        self.epoch = epoch;
        log::debug!("[engine] session {} started ({})", epoch, self.difficulty);
    }
    /// Flips a card. Out-of-range ids are rejected without side effects.
    pub fn click(&mut self, id: Cell) -> Result<Click, EngineError> {
        let flip = self.evaluator.click(&mut self.board, id)?;
        if flip.is_accepted() {
            self.tally.record_move();
        }
        Ok(match flip {
            Flip::Ignored => Click::Ignored,
            Flip::First(id) => Click::Flipped(id),
            Flip::Second { .. } => Click::Scheduled(Ticket {
                epoch: self.epoch,
                delay: self.delay,
            }),
        })
    }
    /// Applies a scheduled resolution.
    pub fn resolve(&mut self, ticket: Ticket) -> Result<Resolution, EngineError> {
        self.guard(ticket.epoch)?;
        let outcome = self
            .evaluator
            .resolve(&mut self.board)?
            .ok_or(EngineError::Stale {
                epoch: ticket.epoch,
                current: self.epoch,
            })?;
        if outcome == Outcome::Match {
            self.tally.record_match();
        }
        Ok(Resolution {
            outcome,
            completion: self.announce(),
        })
    }
    /// Advances the game clock by one second while the clock is running.
    /// Returns whether the clock moved.
    pub fn tick(&mut self, epoch: Epoch) -> Result<bool, EngineError> {
        self.guard(epoch)?;
        if self.tally.is_running() {
            self.tally.tick();
            Ok(true)
        } else {
            Ok(false)
        }
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            epoch: self.epoch,
            difficulty: self.difficulty,
            moves: self.tally.moves(),
            matches: self.tally.matches(),
            pairs: self.tally.pairs(),
            elapsed: self.tally.elapsed(),
            complete: self.is_complete(),
            locked: self.evaluator.phase().is_locked(),
            score: self.is_complete().then(|| self.tally.score()),
            cards: self.board.cards().iter().map(View::from).collect(),
        }
    }
}

impl Engine {
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn phase(&self) -> Phase {
        self.evaluator.phase()
    }
    pub fn tally(&self) -> Tally {
        self.tally
    }
    pub fn is_complete(&self) -> bool {
        self.tally.is_complete()
    }
    fn guard(&self, epoch: Epoch) -> Result<(), EngineError> {
        if epoch == self.epoch {
            Ok(())
        } else {
            Err(EngineError::Stale {
                epoch,
                current: self.epoch,
            })
        }
    }
    /// Edge-triggered: yields the completion once per session.
    fn announce(&mut self) -> Option<Completion> {
        if self.announced || !self.tally.is_complete() {
            return None;
        }
        debug_assert!(self.board.all_matched());
        self.announced = true;
        Some(Completion {
            difficulty: self.difficulty,
            moves: self.tally.moves(),
            elapsed: self.tally.elapsed(),
            score: self.tally.score(),
        })
    }
}

#[cfg(test)]
impl Engine {
    pub(crate) fn board(&self) -> &Board {
        &self.board
    }
}
