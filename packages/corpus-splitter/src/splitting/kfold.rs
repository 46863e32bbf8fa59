//! Lazy k-fold iteration over a token ring.

use super::ring::cut_unchecked;
use super::types::TrainEval;
use crate::types::Sentence;

/// Iterator over the folds of a k-fold split.
///
/// Each fold starts where the previous one ended and spans
/// `N - N / folds` training tokens, so the evaluation windows rotate around
/// the ring in steps of `N / folds`. Yields exactly `folds` items and cannot
/// be restarted.
#[derive(Debug, Clone)]
pub struct KFold {
    sentences: Vec<Sentence>,
    n_tokens: usize,
    folds: usize,
    cut: usize,
    yielded: usize,
}

impl KFold {
    /// `start` must be below `n_tokens`, and `folds` between 1 and `n_tokens`.
    pub(super) fn new(sentences: Vec<Sentence>, n_tokens: usize, folds: usize, start: usize) -> Self {
        Self {
            sentences,
            n_tokens,
            folds,
            cut: start,
            yielded: 0,
        }
    }

    /// Sentences in the order the folds cut them.
    #[must_use]
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    /// Number of training tokens in every fold.
    #[must_use]
    pub fn train_width(&self) -> usize {
        self.n_tokens - self.n_tokens / self.folds
    }
}

impl Iterator for KFold {
    type Item = TrainEval;

    fn next(&mut self) -> Option<Self::Item> {
        if self.yielded == self.folds {
            return None;
        }

        let cut1 = self.cut;
        let cut2 = (cut1 + self.train_width()) % self.n_tokens;
        self.cut = cut2;
        self.yielded += 1;

        tracing::debug!(fold = self.yielded, cut1, cut2, "k-fold cut");
        Some(cut_unchecked(&self.sentences, cut1, cut2).into())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.folds - self.yielded;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for KFold {}
