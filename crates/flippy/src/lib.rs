//! Memory matching game with accounts and a leaderboard.
//!
//! This facade crate re-exports all public flippy crates for convenient access.
//!
//! ## Crate Organization
//!
//! ### Core Types
//! - [`core`]: type aliases, constants, and shared traits
//! - [`engine`]: deck, board, round evaluation, and scoring
//!
//! ### Infrastructure
//! - [`database`]: connection and schema migration
//! - [`auth`]: accounts and sessions
//! - [`records`]: score history, leaderboard, and statistics
//!
//! ### Application
//! - [`gameroom`]: async live tables
//! - [`server`]: unified backend

pub use flippy_core     as core;
pub use flippy_engine   as engine;
pub use flippy_database as database;
pub use flippy_auth     as auth;
pub use flippy_records  as records;
pub use flippy_gameroom as gameroom;
pub use flippy_server   as server;

// Re-export commonly used types at the root
pub use flippy_core::*;
