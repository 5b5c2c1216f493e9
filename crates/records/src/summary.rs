use super::*;
use flippy_core::*;
use flippy_engine::Difficulty;

/// Mean rounded half-up; zero for no samples.
fn mean<I>(samples: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let (sum, n) = samples
        .into_iter()
        .fold((0u64, 0u64), |(sum, n), x| (sum + x as u64, n + 1));
    match n {
        0 => 0,
        n => ((2 * sum + n) / (2 * n)) as u32,
    }
}

/// Highest score; among equals the latest in `scores`.
fn best<'a, I>(scores: I) -> Option<&'a Score>
where
    I: IntoIterator<Item = &'a Score>,
{
    scores.into_iter().max_by_key(|s| s.score())
}

/// Statistics for one difficulty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Breakdown {
    pub games_played: usize,
    pub avg_time: Seconds,
    pub avg_moves: Moves,
    pub best_score: Points,
}

impl Breakdown {
    fn of(scores: &[&Score]) -> Self {
        Self {
            games_played: scores.len(),
            avg_time: mean(scores.iter().map(|s| s.time())),
            avg_moves: mean(scores.iter().map(|s| s.moves())),
            best_score: best(scores.iter().copied()).map(Score::score).unwrap_or(0),
        }
    }
}

/// Per-player statistics across every recorded game.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub total_games: usize,
    pub avg_time: Seconds,
    pub avg_moves: Moves,
    pub most_played: Difficulty,
    pub best_easy: Option<Score>,
    pub best_hard: Option<Score>,
    pub easy: Breakdown,
    pub hard: Breakdown,
}

impl Default for Summary {
    fn default() -> Self {
        let empty: &[Score] = &[];
        Self::from(empty)
    }
}

impl From<&[Score]> for Summary {
    /// `scores` must be one player's history, oldest first.
    fn from(scores: &[Score]) -> Self {
        let of = |d: Difficulty| {
            scores
                .iter()
                .filter(|s| s.difficulty() == d)
                .collect::<Vec<_>>()
        };
        let ref easy = of(Difficulty::Easy);
        let ref hard = of(Difficulty::Hard);
        Self {
            total_games: scores.len(),
            avg_time: mean(scores.iter().map(Score::time)),
            avg_moves: mean(scores.iter().map(Score::moves)),
            most_played: if easy.len() >= hard.len() {
                Difficulty::Easy
            } else {
                Difficulty::Hard
            },
            best_easy: best(easy.iter().copied()).cloned(),
            best_hard: best(hard.iter().copied()).cloned(),
            easy: Breakdown::of(easy),
            hard: Breakdown::of(hard),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use std::time::UNIX_EPOCH;

    fn game(difficulty: Difficulty, moves: Moves, time: Seconds, at: u64) -> Score {
        Score::restore(
            ID::default(),
            ID::default(),
            difficulty,
            moves,
            time,
            flippy_engine::score(moves, time),
            UNIX_EPOCH + Duration::from_secs(at),
        )
    }

    #[test]
    fn empty_history() {
        let summary = Summary::default();
        assert_eq!(summary.total_games, 0);
        assert_eq!(summary.avg_time, 0);
        assert_eq!(summary.avg_moves, 0);
        assert_eq!(summary.most_played, Difficulty::Easy);
        assert_eq!(summary.best_easy, None);
        assert_eq!(summary.best_hard, None);
        assert_eq!(summary.easy, Breakdown::default());
        assert_eq!(summary.hard, Breakdown::default());
    }

    #[test]
    fn averages_round_half_up() {
        assert_eq!(mean([1, 2]), 2);
        assert_eq!(mean([1, 1, 2]), 1);
        assert_eq!(mean([2, 3, 3]), 3);
        assert_eq!(mean(Vec::new()), 0);
    }

    #[test]
    fn splits_by_difficulty() {
        let scores = vec![
            game(Difficulty::Easy, 20, 40, 1),
            game(Difficulty::Hard, 50, 120, 2),
            game(Difficulty::Easy, 25, 61, 3),
        ];
        let summary = Summary::from(&scores[..]);
        assert_eq!(summary.total_games, 3);
        assert_eq!(summary.avg_moves, 32);
        assert_eq!(summary.avg_time, 74);
        assert_eq!(summary.most_played, Difficulty::Easy);
        assert_eq!(summary.easy.games_played, 2);
        assert_eq!(summary.easy.avg_moves, 23);
        assert_eq!(summary.easy.avg_time, 51);
        assert_eq!(summary.easy.best_score, 800 + 960);
        assert_eq!(summary.hard.games_played, 1);
        assert_eq!(summary.hard.best_score, 500 + 880);
        assert_eq!(summary.best_easy.as_ref(), Some(&scores[0]));
        assert_eq!(summary.best_hard.as_ref(), Some(&scores[1]));
    }

    #[test]
    fn tied_counts_favour_easy() {
        let scores = vec![
            game(Difficulty::Hard, 40, 100, 1),
            game(Difficulty::Easy, 20, 50, 2),
        ];
        assert_eq!(Summary::from(&scores[..]).most_played, Difficulty::Easy);
        let scores = vec![
            game(Difficulty::Hard, 40, 100, 1),
            game(Difficulty::Hard, 40, 100, 2),
            game(Difficulty::Easy, 20, 50, 3),
        ];
        assert_eq!(Summary::from(&scores[..]).most_played, Difficulty::Hard);
    }

    #[test]
    fn tied_best_is_most_recent() {
        let scores = vec![
            game(Difficulty::Easy, 20, 50, 1),
            game(Difficulty::Easy, 20, 50, 2),
        ];
        let summary = Summary::from(&scores[..]);
        assert_eq!(summary.best_easy.as_ref(), Some(&scores[1]));
    }
}
