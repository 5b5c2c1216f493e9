use super::*;
use flippy_auth::Member;
use flippy_core::ID;

/// Persistence seam for finished games.
///
/// Implemented for `Arc<tokio_postgres::Client>` (feature `database`) and
/// for the in-process [`Memory`] store.
#[async_trait::async_trait]
pub trait ScoreStore: Send + Sync {
    /// Records a finished game.
    async fn save(&self, score: &Score) -> anyhow::Result<()>;
    /// Best games overall, highest first.
    async fn list_top(&self, limit: usize) -> anyhow::Result<Vec<Standing>>;
    /// One player's games, highest first.
    async fn list_mine(&self, user: ID<Member>) -> anyhow::Result<Vec<Score>>;
    /// One player's aggregate statistics.
    async fn summary(&self, user: ID<Member>) -> anyhow::Result<Summary>;
}
