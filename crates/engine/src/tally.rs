use flippy_core::*;

/// Completion score. Both terms floor at zero.
///
/// `max(0, 1000 - moves * 10) + max(0, 1000 - seconds)`
pub fn score(moves: Moves, seconds: Seconds) -> Points {
    let moved = MOVE_BUDGET.saturating_sub(moves.saturating_mul(MOVE_PENALTY));
    let timed = TIME_BUDGET.saturating_sub(seconds);
    moved + timed
}

/// Counters for one session: moves, matches, and the game clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pairs: usize,
    moves: Moves,
    matches: usize,
    elapsed: Seconds,
}

impl Tally {
    pub fn new(pairs: usize) -> Self {
        Self {
            pairs,
            moves: 0,
            matches: 0,
            elapsed: 0,
        }
    }
    pub fn record_move(&mut self) {
        self.moves += 1;
    }
    pub fn record_match(&mut self) {
        debug_assert!(self.matches < self.pairs);
        self.matches = (self.matches + 1).min(self.pairs);
    }
    pub fn tick(&mut self) {
        self.elapsed = self.elapsed.saturating_add(1);
    }
    pub fn is_complete(&self) -> bool {
        self.matches == self.pairs
    }
    /// The clock runs from the first move until completion.
    pub fn is_running(&self) -> bool {
        self.moves > 0 && !self.is_complete()
    }
    pub fn score(&self) -> Points {
        score(self.moves, self.elapsed)
    }
    pub fn moves(&self) -> Moves {
        self.moves
    }
    pub fn matches(&self) -> usize {
        self.matches
    }
    pub fn pairs(&self) -> usize {
        self.pairs
    }
    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn perfect_score() {
        assert_eq!(score(0, 0), 2000);
    }
    #[test]
    fn move_term_floors_at_zero() {
        assert_eq!(score(150, 0), 1000);
        assert_eq!(score(100, 0), 1000);
        assert_eq!(score(u32::MAX, 0), 1000);
    }
    #[test]
    fn time_term_floors_at_zero() {
        assert_eq!(score(0, 1500), 1000);
        assert_eq!(score(0, 1000), 1000);
        assert_eq!(score(150, 1500), 0);
    }
    #[test]
    fn typical_game() {
        assert_eq!(score(24, 45), (1000 - 240) + (1000 - 45));
    }
    #[test]
    fn completes_on_last_pair() {
        let mut tally = Tally::new(2);
        assert!(!tally.is_complete());
        tally.record_match();
        assert!(!tally.is_complete());
        tally.record_match();
        assert!(tally.is_complete());
    }
    #[test]
    fn clock_runs_between_first_move_and_completion() {
        let mut tally = Tally::new(1);
        assert!(!tally.is_running());
        tally.record_move();
        assert!(tally.is_running());
        tally.record_move();
        tally.record_match();
        assert!(!tally.is_running());
    }
    #[test]
    fn score_reads_counters() {
        let mut tally = Tally::new(8);
        (0..16).for_each(|_| tally.record_move());
        (0..30).for_each(|_| tally.tick());
        assert_eq!(tally.moves(), 16);
        assert_eq!(tally.elapsed(), 30);
        assert_eq!(tally.score(), 840 + 970);
    }
}
