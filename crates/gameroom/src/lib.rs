//! Async runtime for live memory game sessions.
//!
//! A [`Table`] owns one [`flippy_engine::Engine`] inside a tokio task. It is
//! driven by [`Command`]s, turns the engine's tickets into timers, and
//! reports what happened as [`Event`]s.
//!
//! ## Runtime
//!
//! - [`Table`]: the actor, one per live session
//! - [`TimerConfig`] and [`Ticker`]: reveal delay and game clock
//!
//! ## Messages
//!
//! - [`Command`]: input to a table
//! - [`Event`]: output of a table
//! - [`Protocol`]: JSON wire format for both directions
mod command;
mod event;
mod message;
mod protocol;
mod table;
mod timer;

pub use command::*;
pub use event::*;
pub use message::*;
pub use protocol::*;
pub use table::*;
pub use timer::*;
