//! Command-line interface for the corpus splitter.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{SplitConfig, DEFAULT_DELIMITER, DEFAULT_FOLDS, DEFAULT_SPLIT_FRACTION};
use crate::converter::{convert_dataset, kfold_dataset};
use crate::error::Result;
use crate::loader::load_merged;
use crate::splitting::RandomCuts;

/// Corpus Splitter - Split a JSON tagged corpus into train and eval sets.
#[derive(Parser)]
#[command(name = "corpus-splitter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split every document into train/eval and write dataset, train and eval files.
    Split {
        #[command(flatten)]
        common: CommonArgs,

        /// Share of each document's tokens that goes to training
        #[arg(short, long, default_value_t = DEFAULT_SPLIT_FRACTION)]
        fraction: f64,
    },

    /// Write a rotating k-fold split of the whole corpus, one directory per fold.
    Kfold {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of folds
        #[arg(short = 'k', long, default_value_t = DEFAULT_FOLDS)]
        folds: usize,
    },

    /// Print the whole corpus in tagged-text format.
    Merge {
        /// Source JSON file
        input: PathBuf,

        /// Separator between token and tag
        #[arg(short, long, default_value = DEFAULT_DELIMITER)]
        delimiter: String,
    },
}

/// Arguments shared by the splitting commands.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Source JSON file
    pub input: PathBuf,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep sentence order instead of shuffling
    #[arg(long)]
    pub no_shuffle: bool,

    /// Seed for shuffling and cut placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Separator between token and tag
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,
}

impl CommonArgs {
    /// Build a configuration from the command-line arguments.
    #[must_use]
    pub fn to_config(&self) -> SplitConfig {
        let output = self.output.clone().unwrap_or_else(|| PathBuf::from("."));
        SplitConfig::new(&self.input, output)
            .with_randomize(!self.no_shuffle)
            .with_seed(self.seed)
            .with_delimiter(&self.delimiter)
    }
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split { common, fraction } => {
            split_command(&common.to_config().with_split_fraction(fraction))
        }
        Commands::Kfold { common, folds } => kfold_command(&common.to_config(), folds),
        Commands::Merge { input, delimiter } => merge_command(&input, &delimiter),
    }
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Execute the split command.
fn split_command(config: &SplitConfig) -> Result<()> {
    println!(
        "{} {} at fraction {}",
        style("Splitting").bold(),
        style(config.input_path.display()).cyan(),
        style(config.split_fraction).green()
    );
    println!();

    let pb = spinner();
    pb.set_message("Loading and splitting corpus...");

    let report = match convert_dataset(config, RandomCuts::new(config.seed)) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Documents: {}", report.documents);
    if report.skipped_documents > 0 {
        println!(
            "  Skipped (no tokens): {}",
            style(report.skipped_documents).yellow().bold()
        );
    }
    println!("  Tokens: {}", report.total_tokens);
    println!(
        "  Train: {} sentences, {} tokens",
        report.train_sentences, report.train_tokens
    );
    println!(
        "  Eval: {} sentences, {} tokens",
        report.eval_sentences, report.eval_tokens
    );

    println!();
    for path in [&report.dataset_path, &report.train_path, &report.eval_path] {
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }

    Ok(())
}

/// Execute the kfold command.
fn kfold_command(config: &SplitConfig, folds: usize) -> Result<()> {
    println!(
        "{} {} into {} folds",
        style("Splitting").bold(),
        style(config.input_path.display()).cyan(),
        style(folds).green()
    );
    println!();

    let pb = spinner();
    pb.set_message("Writing folds...");

    let reports = match kfold_dataset(config, folds, RandomCuts::new(config.seed)) {
        Ok(reports) => reports,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    for report in &reports {
        println!(
            "  Fold {}: train {} tokens, eval {} tokens -> {}",
            style(report.fold).cyan(),
            report.train_tokens,
            report.eval_tokens,
            report
                .train_path
                .parent()
                .unwrap_or(&config.output_dir)
                .display()
        );
    }

    Ok(())
}

/// Execute the merge command.
fn merge_command(input: &Path, delimiter: &str) -> Result<()> {
    println!("{}", load_merged(input, delimiter)?);
    Ok(())
}
