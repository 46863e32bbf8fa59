//! Result types for the splitting system.

use crate::types::{token_count, Sentence};

/// Outcome of a ring cut.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    /// Fragments on the arc going forward from the first cut to the second.
    pub region: Vec<Sentence>,

    /// Everything else.
    pub complement: Vec<Sentence>,
}

/// A train/evaluation pair.
///
/// Both single and k-fold splits put the arc from the first cut to the second
/// in `train`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainEval {
    pub train: Vec<Sentence>,
    pub eval: Vec<Sentence>,
}

impl TrainEval {
    #[must_use]
    pub fn train_tokens(&self) -> usize {
        token_count(&self.train)
    }

    #[must_use]
    pub fn eval_tokens(&self) -> usize {
        token_count(&self.eval)
    }
}

impl From<Partition> for TrainEval {
    fn from(p: Partition) -> Self {
        Self {
            train: p.region,
            eval: p.complement,
        }
    }
}
