//! Plain-text writer for tagged sentences.
//!
//! The format is one sentence per line, tokens separated by a single space,
//! each token written as `token<delimiter>tag` using the first tag only.
//! Tokens containing spaces or the delimiter are written as-is.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{Sentence, TaggedToken};

/// Render a single token as `token<delimiter>firstTag`.
fn render_token(token: &TaggedToken, delimiter: &str) -> String {
    format!(
        "{}{}{}",
        token.token,
        delimiter,
        token.first_tag().unwrap_or_default()
    )
}

/// Render one sentence as a single line.
#[must_use]
pub fn render_sentence(sentence: &[TaggedToken], delimiter: &str) -> String {
    sentence
        .iter()
        .map(|t| render_token(t, delimiter))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render sentences as newline-separated lines.
///
/// # Examples
/// ```
/// use corpus_splitter::serializer::render_sentences;
/// use corpus_splitter::types::TaggedToken;
///
/// let sents = vec![vec![
///     TaggedToken::new("de", ["DET"]),
///     TaggedToken::new("wet", ["NOUN"]),
/// ]];
/// assert_eq!(render_sentences(&sents, "/"), "de/DET wet/NOUN");
/// ```
pub fn render_sentences<'a, I>(sentences: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = &'a Sentence>,
{
    sentences
        .into_iter()
        .map(|s| render_sentence(s, delimiter))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write sentences to `path`, followed by a trailing newline.
///
/// Parent directories are created when missing.
///
/// # Returns
/// The path that was written.
pub fn write_tagged<'a, I>(path: &Path, sentences: I, delimiter: &str) -> Result<PathBuf>
where
    I: IntoIterator<Item = &'a Sentence>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let content = render_sentences(sentences, delimiter);
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;

    tracing::info!(path = %path.display(), "wrote tagged sentences");
    Ok(path.to_path_buf())
}
