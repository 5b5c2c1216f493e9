pub mod handlers;
mod handle;
mod lobby;

pub use handle::*;
pub use lobby::*;
