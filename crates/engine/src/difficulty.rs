use flippy_core::Arbitrary;

/// Grid size of a session.
///
/// A closed set: every difficulty maps to a square grid with an even number
/// of cells, so every deck splits cleanly into pairs.
///
/// - Easy: 4×4 grid, 8 pairs
/// - Hard: 6×6 grid, 18 pairs
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    /// Both difficulties, easiest first.
    pub const fn all() -> [Self; 2] {
        [Self::Easy, Self::Hard]
    }
    pub const fn rows(&self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Hard => 6,
        }
    }
    pub const fn cols(&self) -> usize {
        match self {
            Self::Easy => 4,
            Self::Hard => 6,
        }
    }
    /// Number of cards on the board.
    pub const fn cells(&self) -> usize {
        self.rows() * self.cols()
    }
    /// Number of distinct identities, each dealt twice.
    pub const fn pairs(&self) -> usize {
        self.cells() / 2
    }
    /// Fewest moves that can possibly clear the board.
    pub const fn fewest(&self) -> usize {
        self.cells()
    }
    /// Wire and storage name.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Hard => "hard",
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy (4x4)",
            Self::Hard => "Hard (6x6)",
        }
    }
}

impl Arbitrary for Difficulty {
    fn random() -> Self {
        Self::all()[rand::random_range(0..2)]
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "hard" => Ok(Self::Hard),
            other => Err(anyhow::anyhow!("invalid difficulty: {}", other)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn grid_sizes() {
        assert_eq!(Difficulty::Easy.cells(), 16);
        assert_eq!(Difficulty::Easy.pairs(), 8);
        assert_eq!(Difficulty::Hard.cells(), 36);
        assert_eq!(Difficulty::Hard.pairs(), 18);
    }
    #[test]
    fn parse_symbols() {
        assert_eq!(Difficulty::try_from("easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::try_from(" HARD ").unwrap(), Difficulty::Hard);
        assert!(Difficulty::try_from("medium").is_err());
        assert!(Difficulty::try_from("").is_err());
    }
    #[test]
    fn display_round_trips() {
        for d in Difficulty::all() {
            assert_eq!(Difficulty::try_from(d.to_string().as_str()).unwrap(), d);
        }
    }
    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Hard).unwrap(),
            "\"hard\""
        );
        assert!(serde_json::from_str::<Difficulty>("\"medium\"").is_err());
    }
}
