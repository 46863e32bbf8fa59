//! Configuration constants and validation functions for the splitter.

use std::path::{Path, PathBuf};

use crate::error::{Result, SplitterError};

/// Default share of tokens that ends up in the training split.
pub const DEFAULT_SPLIT_FRACTION: f64 = 0.9;

/// Default number of folds for k-fold splitting.
pub const DEFAULT_FOLDS: usize = 10;

/// Default separator between a token and its tag in the output format.
pub const DEFAULT_DELIMITER: &str = "/";

/// File name for the full, unsplit corpus.
pub const DATASET_FILE: &str = "dataset.tagged";

/// File name for the training split.
pub const TRAIN_FILE: &str = "train.tagged";

/// File name for the evaluation split.
pub const EVAL_FILE: &str = "eval.tagged";

/// Validate a split fraction.
///
/// # Returns
/// * `Ok(())` if `fraction` lies strictly between 0 and 1
/// * `Err(SplitterError::InvalidFraction)` otherwise (including NaN)
///
/// # Examples
/// ```
/// use corpus_splitter::config::validate_fraction;
///
/// assert!(validate_fraction(0.9).is_ok());
/// assert!(validate_fraction(1.0).is_err());
/// assert!(validate_fraction(0.0).is_err());
/// ```
pub fn validate_fraction(fraction: f64) -> Result<()> {
    if fraction > 0.0 && fraction < 1.0 {
        Ok(())
    } else {
        Err(SplitterError::InvalidFraction(fraction))
    }
}

/// Validate a fold count against the number of tokens it will rotate over.
///
/// # Examples
/// ```
/// use corpus_splitter::config::validate_folds;
///
/// assert!(validate_folds(10, 20).is_ok());
/// assert!(validate_folds(0, 20).is_err());
/// assert!(validate_folds(21, 20).is_err());
/// ```
pub fn validate_folds(folds: usize, n_tokens: usize) -> Result<()> {
    if folds == 0 || folds > n_tokens {
        return Err(SplitterError::InvalidFoldCount {
            folds,
            tokens: n_tokens,
        });
    }
    Ok(())
}

/// Validate that an output path exists and is a directory.
pub fn validate_output_dir(output_dir: &Path) -> Result<()> {
    if !output_dir.exists() {
        return Err(SplitterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", output_dir.display()),
        )));
    }
    if !output_dir.is_dir() {
        return Err(SplitterError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is not a directory: {}", output_dir.display()),
        )));
    }
    Ok(())
}

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitConfig {
    /// Source JSON file.
    pub input_path: PathBuf,

    /// Directory the `.tagged` files are written to.
    pub output_dir: PathBuf,

    /// Share of each document's tokens assigned to the training split.
    pub split_fraction: f64,

    /// Shuffle sentence order before cutting.
    pub randomize: bool,

    /// Seed for the random source; entropy when `None`.
    pub seed: Option<u64>,

    /// Separator between token and tag in the output.
    pub delimiter: String,
}

impl SplitConfig {
    /// Create a configuration with default split settings.
    #[must_use]
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            split_fraction: DEFAULT_SPLIT_FRACTION,
            randomize: true,
            seed: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }

    /// Set the training fraction.
    #[must_use]
    pub fn with_split_fraction(mut self, fraction: f64) -> Self {
        self.split_fraction = fraction;
        self
    }

    /// Set whether sentences are shuffled before cutting.
    #[must_use]
    pub fn with_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Set the token/tag delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Check the settings that do not depend on the corpus.
    pub fn validate(&self) -> Result<()> {
        validate_fraction(self.split_fraction)?;
        validate_output_dir(&self.output_dir)
    }
}
