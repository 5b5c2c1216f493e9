use flippy_auth::Member;
use flippy_core::*;
use flippy_engine::Difficulty;
use std::time::SystemTime;

fn unix<S>(time: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let secs = time
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    serializer.serialize_u64(secs)
}

/// One completed game.
///
/// The score is always computed here from moves and time; whatever a client
/// claims its score was is never trusted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Score {
    id: ID<Self>,
    user: ID<Member>,
    difficulty: Difficulty,
    moves: Moves,
    time: Seconds,
    score: Points,
    #[serde(rename = "created_at", serialize_with = "unix")]
    created: SystemTime,
}

impl Score {
    pub fn new(user: ID<Member>, difficulty: Difficulty, moves: Moves, time: Seconds) -> Self {
        Self {
            id: ID::default(),
            user,
            difficulty,
            moves,
            time,
            score: flippy_engine::score(moves, time),
            created: SystemTime::now(),
        }
    }
    /// Rebuilds a stored record as-is.
    pub fn restore(
        id: ID<Self>,
        user: ID<Member>,
        difficulty: Difficulty,
        moves: Moves,
        time: Seconds,
        score: Points,
        created: SystemTime,
    ) -> Self {
        Self {
            id,
            user,
            difficulty,
            moves,
            time,
            score,
            created,
        }
    }
    pub fn user(&self) -> ID<Member> {
        self.user
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn moves(&self) -> Moves {
        self.moves
    }
    pub fn time(&self) -> Seconds {
        self.time
    }
    pub fn score(&self) -> Points {
        self.score
    }
    pub fn created(&self) -> SystemTime {
        self.created
    }
}

impl Unique for Score {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use flippy_database::*;

    impl Schema for Score {
        fn name() -> &'static str {
            SCORES
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                SCORES,
                " (
                    id          UUID PRIMARY KEY,
                    user_id     UUID NOT NULL REFERENCES ",
                USERS,
                "(id) ON DELETE CASCADE,
                    difficulty  VARCHAR(8) NOT NULL CHECK (difficulty IN ('easy', 'hard')),
                    moves       INTEGER NOT NULL,
                    time        INTEGER NOT NULL,
                    score       INTEGER NOT NULL,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_scores_rank ON ",
                SCORES,
                " (score DESC, created_at);
                 CREATE INDEX IF NOT EXISTS idx_scores_user ON ",
                SCORES,
                " (user_id, created_at);"
            )
        }
    }
}
