//! Memory game engine: one session of the card-matching game.
//!
//! Everything here is synchronous and free of I/O. Time enters only through
//! the host, which feeds back [`Ticket`]s after the reveal delay and calls
//! [`Engine::tick`] once per second.
//!
//! ## Setup
//!
//! - [`Difficulty`]: grid dimensions, Easy 4x4 or Hard 6x6
//! - [`Deck`]: every identity twice, shuffled by Fisher–Yates
//! - [`Card`] and [`Status`]: one grid cell and its face
//!
//! ## Play
//!
//! - [`Board`]: the cards, refusing illegal status changes
//! - [`Evaluator`]: the flip state machine, see [`Phase`]
//! - [`Tally`]: moves, matches, and the clock; [`score`] on completion
//! - [`Engine`]: ties the above together behind session epochs
//!
//! ## Output
//!
//! - [`Snapshot`] and [`View`]: what a renderer is allowed to see
//! - [`Completion`]: the final result, announced once per session
mod board;
mod card;
mod deck;
mod difficulty;
mod engine;
mod error;
mod evaluator;
mod snapshot;
mod tally;

pub use board::*;
pub use card::*;
pub use deck::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use evaluator::*;
pub use snapshot::*;
pub use tally::*;
