//! Word frequency analysis.
//!
//! Converts a filtered token stream into a normalized importance score per
//! unique word: each count is divided by the maximum count in the same
//! document, so scores land in `(0, 1]` and the most frequent word scores
//! exactly `1.0`. Scores are only meaningful relative to one document's
//! frequency distribution — never share a [`WordScores`] across documents.

use rustc_hash::FxHashMap;

use crate::errors::SummarizeError;

/// Normalized word scores for a single document.
///
/// Keys are exactly the distinct values of the filtered token stream the
/// map was built from. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct WordScores {
    scores: FxHashMap<String, f64>,
}

impl WordScores {
    /// Score for `word`, or `0.0` if the word is not in the map.
    ///
    /// The zero default is load-bearing for sentence scoring: stopwords,
    /// punctuation, and out-of-vocabulary tokens contribute nothing.
    pub fn score(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }

    /// Whether `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterate over `(word, score)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(w, &s)| (w.as_str(), s))
    }
}

/// Frequency analyzer — counts occurrences and normalizes by the maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyAnalyzer;

impl FrequencyAnalyzer {
    /// Create a new analyzer.
    pub fn new() -> Self {
        Self
    }

    /// Build normalized word scores from an already-lowercased,
    /// already-filtered token stream.
    ///
    /// Counting is order-insensitive; the result is deterministic for an
    /// identical input multiset. Empty input is a hard precondition
    /// violation ([`SummarizeError::EmptyInput`]) — there is no maximum to
    /// normalize against.
    pub fn analyze(&self, tokens: &[String]) -> Result<WordScores, SummarizeError> {
        if tokens.is_empty() {
            return Err(SummarizeError::EmptyInput);
        }

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        // Non-empty input guarantees a maximum of at least 1.
        let max_count = counts.values().copied().max().unwrap_or(1) as f64;

        let scores = counts
            .into_iter()
            .map(|(word, count)| (word.to_string(), count as f64 / max_count))
            .collect();

        Ok(WordScores { scores })
    }
}
