//! Score history and the views derived from it.
//!
//! ## Records
//!
//! - [`Score`]: one completed game, scored on the server
//! - [`Standing`]: a score with its owner's username, one leaderboard row
//!
//! ## Aggregation
//!
//! - [`Summary`] and [`Breakdown`]: per-player statistics
//!
//! ## Storage
//!
//! - [`ScoreStore`]: persistence seam, backed by Postgres or by [`Memory`]
mod memory;
mod score;
mod standing;
mod store;
mod summary;

pub use memory::*;
pub use score::*;
pub use standing::*;
pub use store::*;
pub use summary::*;

#[cfg(feature = "database")]
mod postgres;
