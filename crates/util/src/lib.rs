//! Core type aliases, traits, and constants for flippy.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the flippy workspace.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Position of a card in the flattened grid (row-major).
pub type Cell = usize;
/// Face value shared by exactly two cards of a deck.
pub type Identity = u8;
/// Cards flipped face-up over a session.
pub type Moves = u32;
/// Whole seconds on the game clock.
pub type Seconds = u32;
/// Points awarded for a completed session.
pub type Points = u32;
/// Session version. Bumped on every new game to invalidate stale callbacks.
pub type Epoch = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and simulation.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying UUID.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}
impl<T> TryFrom<&str> for ID<T> {
    type Error = uuid::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        uuid::Uuid::parse_str(s).map(Self::from)
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// GAME TIMING
// The reveal delay keeps both faces of a round visible before resolution.
// ============================================================================
/// Pause between the second flip of a round and its resolution.
pub const REVEAL_DELAY: std::time::Duration = std::time::Duration::from_millis(1000);
/// Interval of the external game clock.
pub const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

// ============================================================================
// SCORING
// score = max(0, MOVE_BUDGET - moves * MOVE_PENALTY) + max(0, TIME_BUDGET - seconds)
// ============================================================================
/// Points available from the move term before penalties.
pub const MOVE_BUDGET: Points = 1000;
/// Points deducted per move.
pub const MOVE_PENALTY: Points = 10;
/// Points available from the time term, one deducted per second.
pub const TIME_BUDGET: Points = 1000;

// ============================================================================
// ACCOUNTS
// ============================================================================
/// Shortest accepted username.
pub const USERNAME_MIN: usize = 3;
/// Longest accepted username.
pub const USERNAME_MAX: usize = 32;
/// Shortest accepted password.
pub const PASSWORD_MIN: usize = 8;
/// Default number of leaderboard rows.
pub const LEADERBOARD_SIZE: i64 = 50;
/// Upper bound on requested leaderboard rows.
pub const LEADERBOARD_MAX: i64 = 500;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// File-only logging for interactive binaries that own the terminal.
#[cfg(feature = "server")]
pub fn quiet() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    simplelog::WriteLogger::init(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    )
    .expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    struct Marker;
    #[test]
    fn ids_are_unique() {
        let a = ID::<Marker>::default();
        let b = ID::<Marker>::default();
        assert_ne!(a, b);
    }
    #[test]
    fn id_parses_its_display() {
        let id = ID::<Marker>::default();
        let back = ID::<Marker>::try_from(id.to_string().as_str()).unwrap();
        assert_eq!(id, back);
    }
    #[test]
    fn id_rejects_garbage() {
        assert!(ID::<Marker>::try_from("not-a-uuid").is_err());
    }
}
