//! The ring cut: select an arc of the concatenated token stream and
//! re-express both arcs as sentence fragments.

use super::types::Partition;
use crate::error::{Result, SplitterError};
use crate::types::{token_count, Sentence};

/// Cut the token ring at `cut1` and `cut2`.
///
/// Tokens are indexed `0..N` in stream order across all sentences. The
/// returned `region` holds the tokens from `cut1` forward to `cut2`
/// (wrapping past the end when `cut1 > cut2`), `complement` holds the rest.
/// Fragments keep their original token order and are never empty.
///
/// When `cut1 == cut2` the region is empty and the complement is an
/// unfragmented copy of `sentences`.
///
/// # Errors
/// * `SplitterError::EmptyCorpus` if the sentences contain no tokens
/// * `SplitterError::CutOutOfRange` if either cut is `>= N`
///
/// # Examples
/// ```
/// use corpus_splitter::splitting::ring_cut;
/// use corpus_splitter::types::TaggedToken;
///
/// let sents = vec![
///     vec![TaggedToken::new("a", ["X"]), TaggedToken::new("b", ["X"])],
///     vec![TaggedToken::new("c", ["X"])],
/// ];
/// // from token 1 ("b") around to token 0 ("a")
/// let p = ring_cut(&sents, 1, 0).unwrap();
/// assert_eq!(p.region.len(), 2); // "b" and "c"
/// assert_eq!(p.complement, vec![vec![TaggedToken::new("a", ["X"])]]);
/// ```
pub fn ring_cut(sentences: &[Sentence], cut1: usize, cut2: usize) -> Result<Partition> {
    let n_tokens = token_count(sentences);
    if n_tokens == 0 {
        return Err(SplitterError::EmptyCorpus);
    }
    for cut in [cut1, cut2] {
        if cut >= n_tokens {
            return Err(SplitterError::CutOutOfRange {
                cut,
                tokens: n_tokens,
            });
        }
    }

    Ok(cut_unchecked(sentences, cut1, cut2))
}

/// Ring cut without range checks. Both cuts must be below the token count.
pub(super) fn cut_unchecked(sentences: &[Sentence], cut1: usize, cut2: usize) -> Partition {
    if cut1 == cut2 {
        return Partition {
            region: Vec::new(),
            complement: sentences.to_vec(),
        };
    }

    let inverted = cut1 > cut2;
    let (start, end) = if inverted { (cut2, cut1) } else { (cut1, cut2) };

    // inner: [start, end), outer: everything else
    let mut inner: Vec<Sentence> = Vec::new();
    let mut outer: Vec<Sentence> = Vec::new();
    let mut index = 0;

    for sentence in sentences {
        let mut fragment: Sentence = Vec::new();
        for token in sentence {
            if index == start {
                close_fragment(&mut fragment, &mut outer);
            }
            if index == end {
                close_fragment(&mut fragment, &mut inner);
            }
            fragment.push(token.clone());
            index += 1;
        }

        if !fragment.is_empty() {
            let last = index - 1;
            if (start..end).contains(&last) {
                inner.push(fragment);
            } else {
                outer.push(fragment);
            }
        }
    }

    if inverted {
        Partition {
            region: outer,
            complement: inner,
        }
    } else {
        Partition {
            region: inner,
            complement: outer,
        }
    }
}

fn close_fragment(fragment: &mut Sentence, group: &mut Vec<Sentence>) {
    if !fragment.is_empty() {
        group.push(std::mem::take(fragment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaggedToken;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    /// Sentences whose tokens are their global stream positions.
    fn numbered(lengths: &[usize]) -> Vec<Sentence> {
        let mut next = 0;
        lengths
            .iter()
            .map(|&len| {
                (0..len)
                    .map(|_| {
                        let tok = TaggedToken::new(next.to_string(), ["N"]);
                        next += 1;
                        tok
                    })
                    .collect()
            })
            .collect()
    }

    fn positions(sentences: &[Sentence]) -> Vec<usize> {
        sentences
            .iter()
            .flatten()
            .map(|t| t.token.parse().unwrap())
            .collect()
    }

    fn lengths(sentences: &[Sentence]) -> Vec<usize> {
        sentences.iter().map(Vec::len).collect()
    }

    #[test]
    fn test_forward_cut() {
        let sents = numbered(&[3, 17]);
        let p = ring_cut(&sents, 0, 18).unwrap();

        assert_eq!(lengths(&p.region), vec![3, 15]);
        assert_eq!(lengths(&p.complement), vec![2]);
        assert_eq!(positions(&p.complement), vec![18, 19]);
    }

    #[test]
    fn test_wrapping_cut() {
        let sents = numbered(&[3, 17]);
        let p = ring_cut(&sents, 15, 5).unwrap();

        // region wraps: 15..20 then 0..5, reported in stream order
        assert_eq!(positions(&p.region), vec![0, 1, 2, 3, 4, 15, 16, 17, 18, 19]);
        assert_eq!(lengths(&p.region), vec![3, 2, 5]);
        assert_eq!(positions(&p.complement), (5..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_cut_order_swaps_roles() {
        let sents = numbered(&[4, 4, 4]);
        let forward = ring_cut(&sents, 2, 9).unwrap();
        let backward = ring_cut(&sents, 9, 2).unwrap();

        assert_eq!(forward.region, backward.complement);
        assert_eq!(forward.complement, backward.region);
    }

    #[test]
    fn test_conservation_and_disjointness() {
        let sents = numbered(&[1, 5, 2, 7, 3]);
        let n = token_count(&sents);

        for cut1 in 0..n {
            for cut2 in 0..n {
                let p = ring_cut(&sents, cut1, cut2).unwrap();
                let region: HashSet<usize> = positions(&p.region).into_iter().collect();
                let complement: HashSet<usize> = positions(&p.complement).into_iter().collect();

                assert_eq!(region.len() + complement.len(), n);
                assert!(region.is_disjoint(&complement));
                assert_eq!(region.len(), (cut2 + n - cut1) % n);
            }
        }
    }

    #[test]
    fn test_fragments_never_empty() {
        let sents = numbered(&[1, 5, 2, 7, 3]);
        let n = token_count(&sents);

        for cut1 in 0..n {
            for cut2 in 0..n {
                let p = ring_cut(&sents, cut1, cut2).unwrap();
                assert!(p.region.iter().chain(&p.complement).all(|f| !f.is_empty()));
            }
        }
    }

    #[test]
    fn test_zero_width_region() {
        let sents = numbered(&[3, 17]);
        let p = ring_cut(&sents, 7, 7).unwrap();

        assert!(p.region.is_empty());
        assert_eq!(p.complement, sents);
    }

    #[test]
    fn test_cut_at_sentence_boundary_does_not_fragment() {
        let sents = numbered(&[3, 4, 5]);
        let p = ring_cut(&sents, 3, 7).unwrap();

        assert_eq!(p.region, vec![sents[1].clone()]);
        assert_eq!(p.complement, vec![sents[0].clone(), sents[2].clone()]);
    }

    #[test]
    fn test_empty_sentences_are_skipped() {
        let mut sents = numbered(&[2, 2]);
        sents.insert(1, Vec::new());
        let p = ring_cut(&sents, 1, 3).unwrap();

        assert_eq!(positions(&p.region), vec![1, 2]);
        assert_eq!(lengths(&p.complement), vec![1, 1]);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            ring_cut(&[], 0, 0),
            Err(SplitterError::EmptyCorpus)
        ));
        assert!(matches!(
            ring_cut(&[Vec::new()], 0, 0),
            Err(SplitterError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_cut_out_of_range() {
        let sents = numbered(&[3]);
        assert!(matches!(
            ring_cut(&sents, 0, 3),
            Err(SplitterError::CutOutOfRange { cut: 3, tokens: 3 })
        ));
    }
}
