use flippy_core::*;
use flippy_engine::Difficulty;
use flippy_engine::Ticket;

/// Input to a [`crate::Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Player clicked a card.
    Click(Cell),
    /// Player asked for a fresh deal; `None` keeps the difficulty.
    NewGame(Option<Difficulty>),
    /// Player walked away.
    Leave,
    /// Reveal delay of a round elapsed.
    Resolve(Ticket),
    /// One second of the game clock elapsed.
    Tick(Epoch),
}

impl Command {
    /// Whether the command came from the table's own timers.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Resolve(_) | Self::Tick(_))
    }
}
