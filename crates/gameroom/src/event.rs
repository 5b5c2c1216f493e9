use flippy_core::*;
use flippy_engine::Completion;
use flippy_engine::Snapshot;

/// Output of a [`crate::Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// State after an accepted click, a resolution, a tick, or a new deal.
    Snapshot(Snapshot),
    /// The session was cleared. Sent once per session.
    Complete(Completion),
    /// The result was stored.
    Saved(Points),
    /// Something the player should know that does not stop play.
    Notice(String),
    /// A command was refused; nothing changed.
    Rejected(String),
}

impl Event {
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Self::Snapshot(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Snapshot(s) => write!(
                f,
                "{} moves, {}/{} pairs, {}s",
                s.moves, s.matches, s.pairs, s.elapsed
            ),
            Self::Complete(c) => write!(f, "{}", c),
            Self::Saved(points) => write!(f, "saved {} points", points),
            Self::Notice(text) => write!(f, "notice: {}", text),
            Self::Rejected(reason) => write!(f, "rejected: {}", reason),
        }
    }
}
