use super::*;
use flippy_auth::Member;
use flippy_core::*;
use flippy_database::*;
use flippy_engine::Difficulty;
use std::sync::Arc;
use tokio_postgres::Client;
use tokio_postgres::Row;

const COLUMNS: &str = "s.id, s.user_id, s.difficulty, s.moves, s.time, s.score, s.created_at";

/// Column values are non-negative by construction.
fn int(n: u32) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

fn hydrate(row: &Row) -> anyhow::Result<Score> {
    Ok(Score::restore(
        ID::from(row.get::<_, uuid::Uuid>(0)),
        ID::from(row.get::<_, uuid::Uuid>(1)),
        Difficulty::try_from(row.get::<_, &str>(2))?,
        row.get::<_, i32>(3).max(0) as Moves,
        row.get::<_, i32>(4).max(0) as Seconds,
        row.get::<_, i32>(5).max(0) as Points,
        row.get::<_, std::time::SystemTime>(6),
    ))
}

#[async_trait::async_trait]
impl ScoreStore for Arc<Client> {
    async fn save(&self, score: &Score) -> anyhow::Result<()> {
        self.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                SCORES,
                " (id, user_id, difficulty, moves, time, score, created_at)
                  VALUES ($1, $2, $3, $4, $5, $6, $7)"
            ),
            &[
                &score.id().inner(),
                &score.user().inner(),
                &score.difficulty().symbol(),
                &int(score.moves()),
                &int(score.time()),
                &int(score.score()),
                &score.created(),
            ],
        )
        .await?;
        log::debug!("[scores] saved {} for {}", score.id(), score.user());
        Ok(())
    }
    async fn list_top(&self, limit: usize) -> anyhow::Result<Vec<Standing>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        self.query(
            const_format::concatcp!(
                "SELECT ",
                COLUMNS,
                ", u.username FROM ",
                SCORES,
                " s JOIN ",
                USERS,
                " u ON u.id = s.user_id
                  ORDER BY s.score DESC, s.created_at ASC
                  LIMIT $1"
            ),
            &[&limit],
        )
        .await?
        .iter()
        .map(|row| Ok(Standing::new(row.get::<_, String>(7), hydrate(row)?)))
        .collect()
    }
    async fn list_mine(&self, user: ID<Member>) -> anyhow::Result<Vec<Score>> {
        self.query(
            const_format::concatcp!(
                "SELECT ",
                COLUMNS,
                " FROM ",
                SCORES,
                " s WHERE s.user_id = $1
                  ORDER BY s.score DESC, s.created_at ASC"
            ),
            &[&user.inner()],
        )
        .await?
        .iter()
        .map(hydrate)
        .collect()
    }
    async fn summary(&self, user: ID<Member>) -> anyhow::Result<Summary> {
        let history = self
            .query(
                const_format::concatcp!(
                    "SELECT ",
                    COLUMNS,
                    " FROM ",
                    SCORES,
                    " s WHERE s.user_id = $1
                      ORDER BY s.created_at ASC"
                ),
                &[&user.inner()],
            )
            .await?
            .iter()
            .map(hydrate)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Summary::from(&history[..]))
    }
}
