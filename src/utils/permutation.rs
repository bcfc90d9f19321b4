use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A uniformly shuffled ordering of the identifiers `1..=n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomPermutation(pub Vec<usize>);

impl RandomPermutation {
    pub fn generate(n: usize, rng: &mut impl Rng) -> Self {
        let mut values: Vec<usize> = (1..=n).collect();
        values.shuffle(rng);
        RandomPermutation(values)
    }

    /// Keeps only the first `len` identifiers.
    pub fn truncated(mut self, len: usize) -> Vec<usize> {
        self.0.truncate(len);
        self.0
    }
}

/// Seeded generator when a seed is given, OS entropy otherwise.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
