use super::*;
use flippy_core::Identity;
use rand::Rng;
use rand::seq::SliceRandom;

/// The identities of a fresh deck, before ids are assigned.
///
/// Holds every identity in `0..pairs` exactly twice. Shuffling is a
/// Fisher–Yates pass, so every arrangement is equally likely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    difficulty: Difficulty,
    identities: Vec<Identity>,
}

impl Deck {
    /// Unshuffled deck: `[0, 0, 1, 1, ..., pairs-1, pairs-1]`.
    pub fn ordered(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            identities: (0..difficulty.pairs())
                .flat_map(|i| [i as Identity; 2])
                .collect(),
        }
    }
    /// Uniform in-place permutation.
    pub fn shuffle<R>(mut self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        self.identities.shuffle(rng);
        self
    }
    /// Lays the deck out on the grid, assigning ids in deck order.
    pub fn deal(self) -> Vec<Card> {
        self.identities
            .into_iter()
            .enumerate()
            .map(|(id, identity)| Card::new(id, identity))
            .collect()
    }
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }
    pub fn len(&self) -> usize {
        self.identities.len()
    }
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

/// Shuffled, face-down cards for a new session.
pub fn generate(difficulty: Difficulty) -> Vec<Card> {
    generate_with(difficulty, &mut rand::rng())
}

/// Same as [`generate`] with a caller-supplied source of randomness.
pub fn generate_with<R>(difficulty: Difficulty, rng: &mut R) -> Vec<Card>
where
    R: Rng + ?Sized,
{
    Deck::ordered(difficulty).shuffle(rng).deal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn counts(cards: &[Card], pairs: usize) -> Vec<usize> {
        let mut counts = vec![0; pairs];
        for card in cards {
            counts[card.identity() as usize] += 1;
        }
        counts
    }

    #[test]
    fn ordered_deck_holds_each_pair() {
        let deck = Deck::ordered(Difficulty::Easy);
        assert_eq!(deck.len(), 16);
        assert_eq!(
            deck.identities(),
            &[0, 0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7]
        );
    }

    #[test]
    fn every_identity_appears_twice() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        for difficulty in Difficulty::all() {
            for _ in 0..64 {
                let cards = generate_with(difficulty, rng);
                assert_eq!(cards.len(), difficulty.cells());
                assert!(counts(&cards, difficulty.pairs()).iter().all(|&n| n == 2));
            }
        }
    }

    #[test]
    fn ids_follow_grid_order() {
        let cards = generate(Difficulty::Hard);
        assert!(cards.iter().enumerate().all(|(i, c)| c.id() == i));
        assert!(cards.iter().all(Card::is_face_down));
    }

    #[test]
    fn shuffle_has_no_positional_bias() {
        let difficulty = Difficulty::Easy;
        let trials = 16_000;
        let ref mut rng = SmallRng::seed_from_u64(0xF11B);
        let mut table = vec![vec![0usize; difficulty.pairs()]; difficulty.cells()];
        for _ in 0..trials {
            for card in generate_with(difficulty, rng) {
                table[card.id()][card.identity() as usize] += 1;
            }
        }
        // each position holds a given identity with probability 2/cells
        let expected = trials * 2 / difficulty.cells();
        let tolerance = expected / 10;
        for position in table.iter() {
            for &observed in position.iter() {
                assert!(observed.abs_diff(expected) < tolerance, "{observed} vs {expected}");
            }
        }
    }

    #[test]
    fn shuffle_produces_distinct_arrangements() {
        let ref mut rng = SmallRng::seed_from_u64(42);
        let a = generate_with(Difficulty::Hard, rng);
        let b = generate_with(Difficulty::Hard, rng);
        assert_ne!(a, b);
    }
}
