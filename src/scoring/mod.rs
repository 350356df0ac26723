//! Per-sentence score aggregation.
//!
//! Combines sentence boundaries with word scores: each sentence's score is
//! the sum of [`WordScores`](crate::frequency::WordScores) lookups for every
//! raw token of that sentence. The scorer does not re-filter — stopwords,
//! punctuation, and out-of-vocabulary tokens simply look up to `0.0`.

use rustc_hash::FxHashMap;

use crate::frequency::WordScores;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::Sentence;

/// Aggregate scores keyed by [`Sentence::index`].
///
/// Keyed by original index, never by surface text — duplicate sentence
/// text must not collide.
#[derive(Debug, Clone, Default)]
pub struct SentenceScores {
    scores: FxHashMap<usize, f64>,
}

impl SentenceScores {
    /// Score for the sentence with the given original index, or `0.0` if
    /// no such sentence was scored.
    pub fn score(&self, index: usize) -> f64 {
        self.scores.get(&index).copied().unwrap_or(0.0)
    }

    /// Number of scored sentences.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no sentences were scored.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over `(index, score)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.scores.iter().map(|(&i, &s)| (i, s))
    }
}

/// Build a score map directly from `(index, score)` pairs.
///
/// Lets alternative scoring strategies feed the selector without going
/// through [`SentenceScorer`].
impl FromIterator<(usize, f64)> for SentenceScores {
    fn from_iter<I: IntoIterator<Item = (usize, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Sentence scorer — sums word scores over each sentence's own tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceScorer;

impl SentenceScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        Self
    }

    /// Score every sentence against `word_scores`.
    ///
    /// Each sentence's own text is re-tokenized through the same capability
    /// trait that produced the document tokens, and every raw token is
    /// looked up lowercased. A sentence consisting entirely of filtered-out
    /// tokens scores `0.0`; that is a valid score, not an error. The output
    /// holds an entry for every input sentence.
    pub fn score<T: Tokenizer>(
        &self,
        sentences: &[Sentence],
        word_scores: &WordScores,
        tokenizer: &T,
    ) -> SentenceScores {
        let scores = sentences
            .iter()
            .map(|sentence| {
                let total: f64 = tokenizer
                    .tokenize(&sentence.text)
                    .iter()
                    .map(|t| word_scores.score(&t.text.to_lowercase()))
                    .sum();
                (sentence.index, total)
            })
            .collect();

        SentenceScores { scores }
    }
}
