//! Split engine: single and k-fold splits over a sentence list.

use super::kfold::KFold;
use super::ring::cut_unchecked;
use super::source::CutSource;
use super::types::TrainEval;
use crate::config::{validate_folds, validate_fraction};
use crate::error::{Result, SplitterError};
use crate::types::{token_count, Sentence};

/// Engine that splits sentences by token fraction.
///
/// All random choices go through the [`CutSource`]; with `randomize` off the
/// sentence order is left alone and only the cut position comes from the
/// source.
pub struct Splitter<S: CutSource> {
    source: S,
    randomize: bool,
}

impl<S: CutSource> Splitter<S> {
    /// Create a splitter that shuffles sentences before cutting.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            randomize: true,
        }
    }

    /// Set whether sentences are shuffled before cutting.
    #[must_use]
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Split into a training arc of `floor(fraction * N)` tokens and an
    /// evaluation arc holding the remaining tokens.
    ///
    /// The training arc starts at a position drawn from the source and wraps
    /// around the end of the token stream if needed.
    ///
    /// # Errors
    /// * `SplitterError::InvalidFraction` unless `0 < fraction < 1`
    /// * `SplitterError::EmptyCorpus` if there are no tokens
    /// * `SplitterError::CutOutOfRange` if the source picks a start `>= N`
    pub fn single_split(&mut self, mut sentences: Vec<Sentence>, fraction: f64) -> Result<TrainEval> {
        validate_fraction(fraction)?;
        let n_tokens = self.prepare(&mut sentences)?;

        let cut1 = self.start_position(n_tokens)?;
        let width = (fraction * n_tokens as f64).floor() as usize;
        let cut2 = (cut1 + width) % n_tokens;

        tracing::debug!(n_tokens, cut1, cut2, "single split");
        Ok(cut_unchecked(&sentences, cut1, cut2).into())
    }

    /// Prepare a k-fold split.
    ///
    /// Sentences are shuffled once up front; the returned iterator rotates
    /// the cut positions by `N / folds` tokens per fold.
    ///
    /// # Errors
    /// * `SplitterError::EmptyCorpus` if there are no tokens
    /// * `SplitterError::InvalidFoldCount` unless `1 <= folds <= N`
    /// * `SplitterError::CutOutOfRange` if the source picks a start `>= N`
    pub fn kfold_split(&mut self, mut sentences: Vec<Sentence>, folds: usize) -> Result<KFold> {
        let n_tokens = self.prepare(&mut sentences)?;
        validate_folds(folds, n_tokens)?;

        let start = self.start_position(n_tokens)?;
        tracing::debug!(n_tokens, folds, start, "k-fold split");
        Ok(KFold::new(sentences, n_tokens, folds, start))
    }

    /// Count tokens and shuffle if enabled.
    fn prepare(&mut self, sentences: &mut [Sentence]) -> Result<usize> {
        let n_tokens = token_count(sentences);
        if n_tokens == 0 {
            return Err(SplitterError::EmptyCorpus);
        }
        if self.randomize {
            self.source.shuffle(sentences);
        }
        Ok(n_tokens)
    }

    fn start_position(&mut self, n_tokens: usize) -> Result<usize> {
        let cut = self.source.start_position(n_tokens);
        if cut >= n_tokens {
            return Err(SplitterError::CutOutOfRange {
                cut,
                tokens: n_tokens,
            });
        }
        Ok(cut)
    }
}
