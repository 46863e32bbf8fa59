//! Sources of randomness for splitting.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::Sentence;

/// Trait for the random choices a split makes.
///
/// Implementations decide the sentence order and where on the token ring the
/// first cut lands.
pub trait CutSource {
    /// Reorder sentences in place.
    fn shuffle(&mut self, sentences: &mut [Sentence]);

    /// Pick the first cut position in `0..n_tokens`.
    fn start_position(&mut self, n_tokens: usize) -> usize;
}

impl<S: CutSource + ?Sized> CutSource for &mut S {
    fn shuffle(&mut self, sentences: &mut [Sentence]) {
        (**self).shuffle(sentences);
    }

    fn start_position(&mut self, n_tokens: usize) -> usize {
        (**self).start_position(n_tokens)
    }
}

/// Uniform random cuts from a ChaCha generator.
///
/// A fixed seed makes runs reproducible.
#[derive(Debug, Clone)]
pub struct RandomCuts {
    rng: ChaCha8Rng,
}

impl RandomCuts {
    /// Seed from `seed`, or from OS entropy when `None`.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }
}

impl CutSource for RandomCuts {
    fn shuffle(&mut self, sentences: &mut [Sentence]) {
        sentences.shuffle(&mut self.rng);
    }

    fn start_position(&mut self, n_tokens: usize) -> usize {
        if n_tokens == 0 {
            return 0;
        }
        self.rng.gen_range(0..n_tokens)
    }
}

/// Deterministic source: keeps sentence order and always starts at the same
/// position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedCuts {
    start: usize,
}

impl FixedCuts {
    #[must_use]
    pub fn new(start: usize) -> Self {
        Self { start }
    }
}

impl CutSource for FixedCuts {
    fn shuffle(&mut self, _sentences: &mut [Sentence]) {}

    fn start_position(&mut self, _n_tokens: usize) -> usize {
        self.start
    }
}
