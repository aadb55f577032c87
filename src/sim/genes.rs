//! Gene sequences and the mutation operator.
//!
//! A gene sequence is a fixed-length list of movement actions. Mutation
//! redraws each position independently with the configured probability and
//! always returns a new owned sequence.

use rand::prelude::*;

/// One movement action. Decoded from genes in index order 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    East,
    South,
    West,
    North,
}

impl Action {
    /// All actions, indexable by gene code.
    pub const ALL: [Action; 4] = [Action::East, Action::South, Action::West, Action::North];

    /// Unit displacement as (row, col).
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Action::East => (0, 1),
            Action::South => (1, 0),
            Action::West => (0, -1),
            Action::North => (-1, 0),
        }
    }
}

/// Random number generator wrapper for gene operations.
#[derive(Debug)]
pub struct GeneRng {
    rng: StdRng,
}

impl GeneRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Draw a single uniformly random action.
    pub fn random_action(&mut self) -> Action {
        Action::ALL[self.rng.gen_range(0..Action::ALL.len())]
    }

    /// Generate a fresh gene sequence of the given length.
    pub fn random_genes(&mut self, length: usize) -> Vec<Action> {
        (0..length).map(|_| self.random_action()).collect()
    }

    /// Mutate a gene sequence: each position is independently redrawn with
    /// probability `rate`, otherwise copied unchanged. The input is never
    /// modified.
    pub fn mutate(&mut self, genes: &[Action], rate: f32) -> Vec<Action> {
        genes
            .iter()
            .map(|&gene| {
                if self.rng.r#gen::<f32>() < rate {
                    self.random_action()
                } else {
                    gene
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_genes_length() {
        let mut rng = GeneRng::new(42);
        assert_eq!(rng.random_genes(200).len(), 200);
        assert!(rng.random_genes(0).is_empty());
    }

    #[test]
    fn test_mutate_preserves_length() {
        let mut rng = GeneRng::new(42);
        let genes = rng.random_genes(50);
        assert_eq!(rng.mutate(&genes, 0.5).len(), genes.len());
    }

    #[test]
    fn test_mutate_rate_zero_is_identity() {
        let mut rng = GeneRng::new(7);
        let genes = rng.random_genes(100);
        assert_eq!(rng.mutate(&genes, 0.0), genes);
    }

    #[test]
    fn test_mutate_rate_one_redraws_everything() {
        let mut rng = GeneRng::new(7);
        let genes = vec![Action::East; 100];
        let mutated = rng.mutate(&genes, 1.0);
        // Every element was redrawn; with 100 positions the chance that all
        // redraws coincide with East is (1/4)^100, so some must differ.
        assert_eq!(mutated.len(), 100);
        assert!(mutated.iter().any(|&g| g != Action::East));
    }

    #[test]
    fn test_mutate_does_not_alias_input() {
        let mut rng = GeneRng::new(9);
        let genes = vec![Action::North; 10];
        let _ = rng.mutate(&genes, 1.0);
        assert_eq!(genes, vec![Action::North; 10]);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let a = GeneRng::new(123).random_genes(64);
        let b = GeneRng::new(123).random_genes(64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_action_deltas() {
        assert_eq!(Action::East.delta(), (0, 1));
        assert_eq!(Action::South.delta(), (1, 0));
        assert_eq!(Action::West.delta(), (0, -1));
        assert_eq!(Action::North.delta(), (-1, 0));
    }
}
