//! Authentication, sessions, and identity management.
//!
//! JWT-based authentication with Argon2 password hashing. A member logs in
//! with either their username or their email.
//!
//! ## Identity Types
//!
//! - [`Member`]: registered user with credentials
//! - [`Session`]: active login session with expiry
//!
//! ## Security
//!
//! - [`Crypto`]: JWT signing and verification
//! - [`Claims`]: JWT payload structure
//! - [`password`]: Argon2 hashing and verification
//!
//! ## Server
//!
//! - [`AuthRepository`]: SQL for members and sessions
//! - [`Auth`] and [`MaybeAuth`]: request extractors
//! - handlers for `/auth/*`
mod claims;
mod crypto;
mod dto;
mod member;
pub mod password;
mod session;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use member::*;
pub use session::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
