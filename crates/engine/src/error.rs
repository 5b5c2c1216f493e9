use super::*;
use flippy_core::Cell;
use flippy_core::Epoch;

/// Errors that can occur while driving a session.
///
/// None of these leave the session in a modified state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Card id outside the grid.
    InvalidInput { card: Cell, cells: usize },
    /// Resolution or tick addressed to a superseded session,
    /// or a resolution with nothing pending.
    Stale { epoch: Epoch, current: Epoch },
    /// Board refused a status change.
    Transition { card: Cell, from: Status, to: Status },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { card, cells } => {
                write!(f, "invalid card {} (board has {} cards)", card, cells)
            }
            Self::Stale { epoch, current } => {
                write!(f, "stale event for session {} (current {})", epoch, current)
            }
            Self::Transition { card, from, to } => {
                write!(f, "card {} cannot go {} -> {}", card, from, to)
            }
        }
    }
}

impl std::error::Error for EngineError {}
