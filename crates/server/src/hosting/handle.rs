use flippy_gameroom::Command;
use flippy_gameroom::Event;
use flippy_gameroom::Seat;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

pub type Tx = UnboundedSender<Command>;
pub type Rx = Arc<Mutex<UnboundedReceiver<Event>>>;

/// Lobby's grip on a running table.
/// The receiver is shared so a reconnecting socket picks up where the last left off.
#[derive(Clone)]
pub struct TableHandle {
    pub tx: Tx,
    pub rx: Rx,
}

impl From<Seat> for TableHandle {
    fn from(seat: Seat) -> Self {
        Self {
            tx: seat.commands,
            rx: Arc::new(Mutex::new(seat.events)),
        }
    }
}
