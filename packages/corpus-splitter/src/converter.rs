//! Conversion service that ties loading, splitting and writing together.

use std::path::PathBuf;

use crate::config::{validate_output_dir, SplitConfig, DATASET_FILE, EVAL_FILE, TRAIN_FILE};
use crate::error::{Result, SplitterError};
use crate::loader::load_corpus;
use crate::serializer::write_tagged;
use crate::splitting::{CutSource, Splitter};
use crate::types::{token_count, Sentence};

/// Summary of a single train/eval conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    /// Documents that were split.
    pub documents: usize,

    /// Documents skipped because they contain no tokens.
    pub skipped_documents: usize,

    pub total_tokens: usize,
    pub train_sentences: usize,
    pub train_tokens: usize,
    pub eval_sentences: usize,
    pub eval_tokens: usize,

    /// Paths of the full, train and eval files.
    pub dataset_path: PathBuf,
    pub train_path: PathBuf,
    pub eval_path: PathBuf,
}

/// Summary of one written fold.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldReport {
    /// 1-based fold number.
    pub fold: usize,
    pub train_tokens: usize,
    pub eval_tokens: usize,
    pub train_path: PathBuf,
    pub eval_path: PathBuf,
}

/// Split every document of the input corpus and write the three output files.
///
/// Each document is split on its own with `config.split_fraction`, and the
/// per-document train and eval parts are concatenated. `dataset.tagged`
/// receives all sentences in input order.
///
/// # Errors
/// Fails on invalid settings, unreadable or malformed input, a corpus without
/// tokens, or write errors.
pub fn convert_dataset<S: CutSource>(config: &SplitConfig, source: S) -> Result<ConversionReport> {
    config.validate()?;

    let corpus = load_corpus(&config.input_path)?;
    let total_tokens = corpus.token_count();
    if total_tokens == 0 {
        return Err(SplitterError::EmptyCorpus);
    }

    let dataset_path = write_tagged(
        &config.output_dir.join(DATASET_FILE),
        corpus.sentences(),
        &config.delimiter,
    )?;

    let mut splitter = Splitter::new(source).with_randomize(config.randomize);
    let mut train: Vec<Sentence> = Vec::new();
    let mut eval: Vec<Sentence> = Vec::new();
    let mut documents = 0;
    let mut skipped_documents = 0;

    for doc in corpus.documents {
        if doc.token_count() == 0 {
            tracing::warn!(document = %doc.id, "skipping document without tokens");
            skipped_documents += 1;
            continue;
        }

        let split = splitter.single_split(doc.sentences, config.split_fraction)?;
        tracing::debug!(
            document = %doc.id,
            train_tokens = split.train_tokens(),
            eval_tokens = split.eval_tokens(),
            "split document"
        );
        train.extend(split.train);
        eval.extend(split.eval);
        documents += 1;
    }

    let train_path = write_tagged(&config.output_dir.join(TRAIN_FILE), &train, &config.delimiter)?;
    let eval_path = write_tagged(&config.output_dir.join(EVAL_FILE), &eval, &config.delimiter)?;

    Ok(ConversionReport {
        documents,
        skipped_documents,
        total_tokens,
        train_sentences: train.len(),
        train_tokens: token_count(&train),
        eval_sentences: eval.len(),
        eval_tokens: token_count(&eval),
        dataset_path,
        train_path,
        eval_path,
    })
}

/// Run a k-fold split over the whole corpus and write one directory per fold.
///
/// Fold `j` is written to `fold_<j>/train.tagged` and `fold_<j>/eval.tagged`
/// under the output directory, with `j` starting at 1. The split fraction
/// from `config` is not used.
///
/// # Errors
/// Fails on invalid settings, unreadable or malformed input, a corpus without
/// tokens, a fold count outside `1..=N`, or write errors.
pub fn kfold_dataset<S: CutSource>(
    config: &SplitConfig,
    folds: usize,
    source: S,
) -> Result<Vec<FoldReport>> {
    validate_output_dir(&config.output_dir)?;

    let sentences = load_corpus(&config.input_path)?.into_sentences();
    let mut splitter = Splitter::new(source).with_randomize(config.randomize);

    splitter
        .kfold_split(sentences, folds)?
        .enumerate()
        .map(|(i, split)| -> Result<FoldReport> {
            let fold = i + 1;
            let dir = config.output_dir.join(fold_dir_name(fold));
            let train_path = write_tagged(&dir.join(TRAIN_FILE), &split.train, &config.delimiter)?;
            let eval_path = write_tagged(&dir.join(EVAL_FILE), &split.eval, &config.delimiter)?;

            Ok(FoldReport {
                fold,
                train_tokens: split.train_tokens(),
                eval_tokens: split.eval_tokens(),
                train_path,
                eval_path,
            })
        })
        .collect()
}

/// Directory name for a 1-based fold number.
#[must_use]
pub fn fold_dir_name(fold: usize) -> String {
    format!("fold_{fold}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splitting::{FixedCuts, RandomCuts};
    use std::fs;

    const CORPUS: &str = r#"{
        "d1": {"s1": {"t1": ["a", ["A"]], "t2": ["b", ["B"]], "t3": ["c", ["C"]]}},
        "d2": {},
        "d3": {"s1": {"t1": ["x", ["X"]], "t2": ["y", ["Y"]]}, "s2": {"t1": ["z", ["Z"]]}}
    }"#;

    fn setup(json: &str) -> (tempfile::TempDir, SplitConfig) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("dataset.json");
        fs::write(&input, json).unwrap();
        let config = SplitConfig::new(input, dir.path());
        (dir, config)
    }

    #[test]
    fn test_convert_dataset_writes_three_files() {
        let (_dir, config) = setup(CORPUS);
        let config = config.with_split_fraction(0.5).with_randomize(false);

        let report = convert_dataset(&config, FixedCuts::new(0)).unwrap();

        assert_eq!(report.documents, 2);
        assert_eq!(report.skipped_documents, 1);
        assert_eq!(report.total_tokens, 6);
        // floor(0.5 * 3) + floor(0.5 * 3)
        assert_eq!(report.train_tokens, 2);
        assert_eq!(report.eval_tokens, 4);

        assert_eq!(
            fs::read_to_string(&report.dataset_path).unwrap(),
            "a/A b/B c/C\nx/X y/Y\nz/Z\n"
        );
        assert_eq!(fs::read_to_string(&report.train_path).unwrap(), "a/A\nx/X\n");
        assert_eq!(
            fs::read_to_string(&report.eval_path).unwrap(),
            "b/B c/C\ny/Y\nz/Z\n"
        );
    }

    #[test]
    fn test_convert_dataset_conserves_tokens_with_randomness() {
        let (_dir, config) = setup(CORPUS);
        let report = convert_dataset(&config.with_seed(Some(1)), RandomCuts::new(Some(1))).unwrap();
        assert_eq!(report.train_tokens + report.eval_tokens, report.total_tokens);
    }

    #[test]
    fn test_convert_dataset_empty_corpus() {
        let (_dir, config) = setup(r#"{"d1": {"s1": {}}}"#);
        assert!(matches!(
            convert_dataset(&config, FixedCuts::new(0)),
            Err(SplitterError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_convert_dataset_missing_output_dir() {
        let (dir, config) = setup(CORPUS);
        let config = SplitConfig {
            output_dir: dir.path().join("nope"),
            ..config
        };
        assert!(matches!(
            convert_dataset(&config, FixedCuts::new(0)),
            Err(SplitterError::Io(_))
        ));
    }

    #[test]
    fn test_kfold_dataset_writes_fold_dirs() {
        let (dir, config) = setup(CORPUS);
        let reports = kfold_dataset(&config.with_randomize(false), 3, FixedCuts::new(0)).unwrap();

        assert_eq!(reports.len(), 3);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.fold, i + 1);
            assert_eq!(report.train_tokens, 4);
            assert_eq!(report.eval_tokens, 2);
            assert!(report.train_path.starts_with(dir.path().join(fold_dir_name(i + 1))));
            assert!(report.eval_path.exists());
        }
    }

    #[test]
    fn test_kfold_dataset_rejects_too_many_folds() {
        let (_dir, config) = setup(CORPUS);
        assert!(matches!(
            kfold_dataset(&config, 7, FixedCuts::new(0)),
            Err(SplitterError::InvalidFoldCount { folds: 7, tokens: 6 })
        ));
    }
}
