//! Core data types for tagged corpora.

use serde::{Deserialize, Serialize};

/// A token together with its tag set.
///
/// Only the first tag is written to the output format; the rest are kept so
/// that callers can inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token text.
    pub token: String,

    /// Tags in source order. Never empty for tokens produced by the loader.
    pub tags: Vec<String>,
}

impl TaggedToken {
    /// Create a new tagged token.
    #[must_use]
    pub fn new(token: impl Into<String>, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            token: token.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// The primary tag, if any.
    #[must_use]
    pub fn first_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// An ordered run of tagged tokens.
///
/// Split results reuse this type for sentence fragments.
pub type Sentence = Vec<TaggedToken>;

/// Total number of tokens across a list of sentences.
#[must_use]
pub fn token_count(sentences: &[Sentence]) -> usize {
    sentences.iter().map(Vec::len).sum()
}

/// A document: its source identifier and its sentences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub sentences: Vec<Sentence>,
}

impl Document {
    #[must_use]
    pub fn token_count(&self) -> usize {
        token_count(&self.sentences)
    }
}

/// A whole corpus in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Total number of tokens in the corpus.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.documents.iter().map(Document::token_count).sum()
    }

    /// Total number of sentences in the corpus.
    #[must_use]
    pub fn sentence_count(&self) -> usize {
        self.documents.iter().map(|d| d.sentences.len()).sum()
    }

    /// Iterate over all sentences, document by document.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.documents.iter().flat_map(|d| d.sentences.iter())
    }

    /// Consume the corpus into one flat sentence list.
    #[must_use]
    pub fn into_sentences(self) -> Vec<Sentence> {
        self.documents
            .into_iter()
            .flat_map(|d| d.sentences)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(tokens: &[&str]) -> Sentence {
        tokens.iter().map(|t| TaggedToken::new(*t, ["X"])).collect()
    }

    #[test]
    fn test_first_tag() {
        let tok = TaggedToken::new("huis", ["NOUN", "rel"]);
        assert_eq!(tok.first_tag(), Some("NOUN"));

        let bare = TaggedToken::new("huis", Vec::<String>::new());
        assert_eq!(bare.first_tag(), None);
    }

    #[test]
    fn test_corpus_counts() {
        let corpus = Corpus {
            documents: vec![
                Document {
                    id: "d1".to_string(),
                    sentences: vec![sentence(&["a", "b"]), sentence(&["c"])],
                },
                Document {
                    id: "d2".to_string(),
                    sentences: vec![sentence(&["d", "e", "f"])],
                },
            ],
        };

        assert_eq!(corpus.token_count(), 6);
        assert_eq!(corpus.sentence_count(), 3);
        assert_eq!(corpus.sentences().count(), 3);

        let flat = corpus.into_sentences();
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[2][0].token, "d");
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::default();
        assert_eq!(corpus.token_count(), 0);
        assert!(corpus.into_sentences().is_empty());
    }
}
