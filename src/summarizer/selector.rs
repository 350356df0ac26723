//! Order-preserving top-k sentence selection.
//!
//! Selection happens in two deliberately separate phases: ranking purely by
//! score finds the best content; re-sorting the selected set by original
//! index restores readability. Folding the two together (selecting in
//! document order from the start) would bias toward early-document
//! sentences and corrupt the importance ranking.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::errors::SummarizeError;
use crate::scoring::SentenceScores;
use crate::types::Sentence;

/// A selected sentence with the score it was ranked by.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedSentence {
    /// The sentence's original document index.
    pub index: usize,
    /// Verbatim surface text.
    pub text: String,
    /// Aggregate frequency score at selection time.
    pub score: f64,
}

/// Terminal artifact of the extractive pipeline: selected sentences in
/// ascending original-index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Selected sentences, ordered by `index` ascending.
    pub sentences: Vec<SelectedSentence>,
}

impl Summary {
    /// Join the selected surface texts with a single space.
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of selected sentences.
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    /// Whether no sentences were selected.
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Ranking key: higher score wins; at equal score the earlier sentence
/// wins. `total_cmp` makes this a total order without panicking on floats.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Ranked {
    score: f64,
    index: usize,
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Deterministic top-k sentence selector.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Create a new selector.
    pub fn new() -> Self {
        Self
    }

    /// Select the top `k` sentences by score and reassemble them in
    /// original document order.
    ///
    /// Ranking is a bounded priority selection: a min-heap of size `k`
    /// keeps the current best sentences, ordered by `(score, original
    /// index)` with earlier index winning ties — multiple sentences can tie
    /// at `0.0` or at equal nonzero sums, and the tie-break keeps repeated
    /// runs byte-identical.
    ///
    /// `k >= sentences.len()` returns the full document in original order;
    /// that is the natural degenerate case, not an error.
    ///
    /// # Errors
    ///
    /// [`SummarizeError::InvalidLength`] if `k == 0`,
    /// [`SummarizeError::EmptyDocument`] if `sentences` is empty.
    pub fn select(
        &self,
        sentences: &[Sentence],
        scores: &SentenceScores,
        k: usize,
    ) -> Result<Summary, SummarizeError> {
        if k == 0 {
            return Err(SummarizeError::InvalidLength(k));
        }
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyDocument);
        }

        // Phase 1: bounded priority selection. The heap top is the worst
        // of the kept candidates; anything better displaces it.
        let mut heap: BinaryHeap<Reverse<Ranked>> = BinaryHeap::with_capacity(k + 1);
        for sentence in sentences {
            heap.push(Reverse(Ranked {
                score: scores.score(sentence.index),
                index: sentence.index,
            }));
            if heap.len() > k {
                heap.pop();
            }
        }

        let kept: FxHashSet<usize> = heap.into_iter().map(|Reverse(r)| r.index).collect();

        // Phase 2: reassemble the selected set in document order.
        let mut selected: Vec<SelectedSentence> = sentences
            .iter()
            .filter(|s| kept.contains(&s.index))
            .map(|s| SelectedSentence {
                index: s.index,
                text: s.text.clone(),
                score: scores.score(s.index),
            })
            .collect();
        selected.sort_by_key(|s| s.index);

        Ok(Summary {
            sentences: selected,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, i, 0, t.len()))
            .collect()
    }

    fn scores_from(pairs: &[(usize, f64)]) -> SentenceScores {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_top_sentence_wins_at_k1() {
        // S0 = 2.0, S1 = 0.5, k = 1 -> S0 alone.
        let sents = sentences(&["war war", "germany only"]);
        let scores = scores_from(&[(0, 2.0), (1, 0.5)]);

        let summary = SentenceSelector::new().select(&sents, &scores, 1).unwrap();
        assert_eq!(summary.len(), 1);
        assert_eq!(summary.text(), "war war");
    }

    #[test]
    fn test_k_zero_is_invalid() {
        let sents = sentences(&["one."]);
        let scores = scores_from(&[(0, 1.0)]);

        let err = SentenceSelector::new().select(&sents, &scores, 0).unwrap_err();
        assert_eq!(err, SummarizeError::InvalidLength(0));
    }

    #[test]
    fn test_empty_document_is_invalid() {
        let scores = SentenceScores::default();
        let err = SentenceSelector::new().select(&[], &scores, 3).unwrap_err();
        assert_eq!(err, SummarizeError::EmptyDocument);
    }

    #[test]
    fn test_degenerate_k_returns_whole_document() {
        // k >= sentence count returns everything in original order.
        let sents = sentences(&["First.", "Second.", "Third."]);
        let scores = scores_from(&[(0, 0.5), (1, 2.0), (2, 1.0)]);

        let summary = SentenceSelector::new().select(&sents, &scores, 10).unwrap();
        assert_eq!(summary.len(), 3);
        assert_eq!(summary.text(), "First. Second. Third.");
    }

    #[test]
    fn test_selection_reorders_by_document_position() {
        // Output indices come back strictly increasing, whatever the rank order.
        let sents = sentences(&["Low.", "High.", "Mid."]);
        let scores = scores_from(&[(0, 0.5), (1, 3.0), (2, 2.0)]);

        let summary = SentenceSelector::new().select(&sents, &scores, 2).unwrap();
        let indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(summary.text(), "High. Mid.");
    }

    #[test]
    fn test_ties_broken_by_earlier_index() {
        // All sentences tie at the same score: the earliest k win.
        let sents = sentences(&["A.", "B.", "C.", "D."]);
        let scores = scores_from(&[(0, 1.0), (1, 1.0), (2, 1.0), (3, 1.0)]);

        let summary = SentenceSelector::new().select(&sents, &scores, 2).unwrap();
        let indices: Vec<usize> = summary.sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn test_zero_score_sentences_selected_last() {
        // A sentence with no scored tokens is only selected once k covers
        // every higher-ranked sentence.
        let sents = sentences(&["Scored.", "Unscored."]);
        let scores = scores_from(&[(0, 1.5), (1, 0.0)]);

        let top1 = SentenceSelector::new().select(&sents, &scores, 1).unwrap();
        assert_eq!(top1.text(), "Scored.");

        let top2 = SentenceSelector::new().select(&sents, &scores, 2).unwrap();
        assert_eq!(top2.text(), "Scored. Unscored.");
    }

    #[test]
    fn test_determinism() {
        // Identical input and k produce byte-identical output.
        let sents = sentences(&["A one.", "B two.", "C three.", "D four."]);
        let scores = scores_from(&[(0, 1.0), (1, 1.0), (2, 2.0), (3, 0.5)]);

        let first = SentenceSelector::new().select(&sents, &scores, 2).unwrap();
        for _ in 0..5 {
            let again = SentenceSelector::new().select(&sents, &scores, 2).unwrap();
            assert_eq!(again.text(), first.text());
        }
    }

    #[test]
    fn test_summary_text_joins_with_single_space() {
        let sents = sentences(&["One.", "Two."]);
        let scores = scores_from(&[(0, 1.0), (1, 1.0)]);

        let summary = SentenceSelector::new().select(&sents, &scores, 2).unwrap();
        assert_eq!(summary.text(), "One. Two.");
    }
}
