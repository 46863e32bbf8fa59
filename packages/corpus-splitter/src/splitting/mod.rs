//! Token-fraction splitting of tagged sentences.
//!
//! All sentences are treated as one ring of tokens. A split picks two cut
//! positions on the ring; the arc from the first cut to the second becomes
//! the training data and the rest becomes the evaluation data. Sentences
//! that straddle a cut are broken into fragments.

mod engine;
mod kfold;
mod ring;
mod source;
mod types;

pub use engine::Splitter;
pub use kfold::KFold;
pub use ring::ring_cut;
pub use source::{CutSource, FixedCuts, RandomCuts};
pub use types::{Partition, TrainEval};
