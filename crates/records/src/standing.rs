use super::*;

/// One leaderboard row: a score and whose it is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Standing {
    pub username: String,
    #[serde(flatten)]
    pub score: Score,
}

impl Standing {
    pub fn new(username: String, score: Score) -> Self {
        Self { username, score }
    }
}

/// Leaderboard order: higher score first, earlier game first among equals.
pub fn rank(a: &Score, b: &Score) -> std::cmp::Ordering {
    b.score()
        .cmp(&a.score())
        .then_with(|| a.created().cmp(&b.created()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flippy_core::ID;
    use flippy_engine::Difficulty;
    use std::time::Duration;
    use std::time::UNIX_EPOCH;

    fn at(score: u32, secs: u64) -> Score {
        Score::restore(
            ID::default(),
            ID::default(),
            Difficulty::Easy,
            20,
            30,
            score,
            UNIX_EPOCH + Duration::from_secs(secs),
        )
    }

    #[test]
    fn higher_scores_rank_first() {
        let mut scores = vec![at(100, 0), at(300, 0), at(200, 0)];
        scores.sort_by(rank);
        let order = scores.iter().map(Score::score).collect::<Vec<_>>();
        assert_eq!(order, vec![300, 200, 100]);
    }

    #[test]
    fn ties_favour_the_earlier_game() {
        let mut scores = vec![at(500, 20), at(500, 10)];
        scores.sort_by(rank);
        assert_eq!(scores[0].created(), UNIX_EPOCH + Duration::from_secs(10));
    }

    #[test]
    fn username_sits_beside_the_score() {
        let json = serde_json::to_value(Standing::new("ann".into(), at(1, 0))).unwrap();
        assert_eq!(json["username"], "ann");
        assert_eq!(json["score"], 1);
    }
}
