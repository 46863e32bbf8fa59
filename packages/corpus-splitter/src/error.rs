//! Error types for the corpus splitter.
//!
//! Every error is fatal: the splitter is a one-shot offline transform, so
//! callers report the error and stop.

use thiserror::Error;

/// Main error type for the corpus splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// The input file is not valid JSON.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON is valid but does not have the document/sentence/token shape.
    #[error("Malformed corpus at {location}: {message}")]
    InputFormat { location: String, message: String },

    /// Nothing to split: the input contains zero tokens.
    #[error("Corpus contains no tokens")]
    EmptyCorpus,

    /// Split fraction outside the open interval (0, 1).
    #[error("Invalid split fraction: {0}. Expected a value strictly between 0 and 1 (e.g., 0.9)")]
    InvalidFraction(f64),

    /// Fold count of zero or larger than the number of tokens.
    #[error("Invalid fold count {folds}: must be between 1 and the token count ({tokens})")]
    InvalidFoldCount { folds: usize, tokens: usize },

    /// Cut position past the end of the token stream.
    #[error("Cut position {cut} out of range for {tokens} tokens")]
    CutOutOfRange { cut: usize, tokens: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitterError {
    /// Build an [`SplitterError::InputFormat`] for a location in the corpus.
    pub(crate) fn input_format(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InputFormat {
            location: location.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for corpus splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitterError::InvalidFraction(1.5);
        assert!(err.to_string().contains("1.5"));
        assert!(err.to_string().contains("between 0 and 1"));
    }

    #[test]
    fn test_input_format_display() {
        let err = SplitterError::input_format("doc1/s2/t3", "expected [token, tags]");
        assert_eq!(
            err.to_string(),
            "Malformed corpus at doc1/s2/t3: expected [token, tags]"
        );
    }

    #[test]
    fn test_fold_count_display() {
        let err = SplitterError::InvalidFoldCount {
            folds: 30,
            tokens: 20,
        };
        assert_eq!(
            err.to_string(),
            "Invalid fold count 30: must be between 1 and the token count (20)"
        );
    }
}
