use flippy_core::Cell;
use flippy_core::Identity;

/// Visibility of a card within a session.
///
/// Within a round a card moves FaceDown → FaceUp → {Matched | FaceDown}.
/// Matched is terminal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    FaceDown,
    FaceUp,
    Matched,
}

impl Status {
    /// Whether `self → next` is a legal transition.
    pub const fn allows(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::FaceDown, Self::FaceUp)
                | (Self::FaceUp, Self::FaceDown)
                | (Self::FaceUp, Self::Matched)
        )
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FaceDown => write!(f, "face-down"),
            Self::FaceUp => write!(f, "face-up"),
            Self::Matched => write!(f, "matched"),
        }
    }
}

/// A single card on the board.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    id: Cell,
    identity: Identity,
    status: Status,
}

impl Card {
    pub fn new(id: Cell, identity: Identity) -> Self {
        Self {
            id,
            identity,
            status: Status::FaceDown,
        }
    }
    pub fn id(&self) -> Cell {
        self.id
    }
    pub fn identity(&self) -> Identity {
        self.identity
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn is_face_down(&self) -> bool {
        self.status == Status::FaceDown
    }
    pub fn is_matched(&self) -> bool {
        self.status == Status::Matched
    }
    pub(crate) fn set(&mut self, status: Status) {
        self.status = status;
    }
}
