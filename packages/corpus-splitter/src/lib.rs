//! Corpus Splitter - Split tagged corpora into train and evaluation sets.
//!
//! This crate loads a nested JSON tagged corpus, flattens it into tagged
//! sentences and partitions them by token count rather than sentence count.
//! The token stream is treated as a ring and cut at two positions; sentences
//! that straddle a cut are split into fragments.
//!
//! # Example
//!
//! ```
//! use corpus_splitter::splitting::{FixedCuts, Splitter};
//! use corpus_splitter::types::TaggedToken;
//!
//! let sentences = vec![
//!     vec![TaggedToken::new("a", ["X"]), TaggedToken::new("b", ["X"])],
//!     vec![TaggedToken::new("c", ["X"]), TaggedToken::new("d", ["X"])],
//! ];
//!
//! let mut splitter = Splitter::new(FixedCuts::new(1)).with_randomize(false);
//! let split = splitter.single_split(sentences, 0.5).unwrap();
//! assert_eq!(split.train_tokens(), 2); // "b c"
//! assert_eq!(split.eval_tokens(), 2); // "a" and "d"
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Defaults, validation and run configuration
//! - [`types`]: Core data types (TaggedToken, Sentence, Document, Corpus)
//! - [`error`]: Error types and Result alias
//! - [`loader`]: JSON corpus loading
//! - [`splitting`]: Ring cut, single and k-fold splitting
//! - [`serializer`]: Tagged-text output
//! - [`converter`]: End-to-end conversion to output files
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod loader;
pub mod serializer;
pub mod splitting;
pub mod types;

// Re-export main functions
pub use converter::{convert_dataset, kfold_dataset};

// Re-export commonly used items
pub use error::{Result, SplitterError};
pub use splitting::{ring_cut, CutSource, FixedCuts, RandomCuts, Splitter, TrainEval};
pub use types::{Corpus, Document, Sentence, TaggedToken};
