//! Loader for nested JSON tagged corpora.
//!
//! The input is a JSON object keyed by document id, whose values are objects
//! keyed by sentence id, whose values are objects keyed by token id, whose
//! values are `[token, tags]` pairs:
//!
//! ```json
//! {"doc1": {"s1": {"t1": ["Artikel", ["NOUN"]], "t2": ["1", ["NUM", {"inherits": "t1"}]]}}}
//! ```
//!
//! Key order is kept, so documents, sentences and tokens come out in file
//! order. Non-string entries in a tag list carry relation metadata and are
//! dropped.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, SplitterError};
use crate::serializer::render_sentences;
use crate::types::{Corpus, Document, Sentence, TaggedToken};

/// Read and parse a corpus file.
pub fn load_corpus(path: &Path) -> Result<Corpus> {
    let json = fs::read_to_string(path)?;
    let corpus = parse_corpus(&json)?;
    tracing::debug!(
        path = %path.display(),
        documents = corpus.documents.len(),
        sentences = corpus.sentence_count(),
        tokens = corpus.token_count(),
        "loaded corpus"
    );
    Ok(corpus)
}

/// Parse a corpus from a JSON string.
pub fn parse_corpus(json: &str) -> Result<Corpus> {
    let root: Value = serde_json::from_str(json)?;
    let documents = expect_object(root, "corpus")?
        .into_iter()
        .map(|(doc_id, doc)| parse_document(doc_id, doc))
        .collect::<Result<Vec<_>>>()?;

    Ok(Corpus { documents })
}

/// Load a corpus and render it as one text blob.
pub fn load_merged(path: &Path, delimiter: &str) -> Result<String> {
    Ok(merge_corpus(&load_corpus(path)?, delimiter))
}

/// Render every document with the tagged-text writer, documents joined by newlines.
#[must_use]
pub fn merge_corpus(corpus: &Corpus, delimiter: &str) -> String {
    corpus
        .documents
        .iter()
        .map(|doc| render_sentences(&doc.sentences, delimiter))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_document(doc_id: String, doc: Value) -> Result<Document> {
    let sentences = expect_object(doc, &doc_id)?
        .into_iter()
        .map(|(sent_id, sent)| parse_sentence(&format!("{doc_id}/{sent_id}"), sent))
        .collect::<Result<Vec<_>>>()?;

    Ok(Document {
        id: doc_id,
        sentences,
    })
}

fn parse_sentence(location: &str, sent: Value) -> Result<Sentence> {
    expect_object(sent, location)?
        .into_iter()
        .map(|(tok_id, tok)| parse_token(&format!("{location}/{tok_id}"), tok))
        .collect()
}

fn parse_token(location: &str, value: Value) -> Result<TaggedToken> {
    let (token, raw_tags): (String, Vec<Value>) = serde_json::from_value(value)
        .map_err(|e| SplitterError::input_format(location, format!("expected [token, tags]: {e}")))?;

    let tags: Vec<String> = raw_tags
        .into_iter()
        .filter_map(|tag| match tag {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();

    if tags.is_empty() {
        return Err(SplitterError::input_format(
            location,
            format!("token '{token}' has no tag"),
        ));
    }

    Ok(TaggedToken { token, tags })
}

fn expect_object(value: Value, location: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(SplitterError::input_format(
            location,
            format!("expected an object, found {}", json_kind(&other)),
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
