//! Summary quality evaluation contract.
//!
//! The core produces summaries; it computes no overlap metrics (that is an
//! external text-overlap scoring library's job). This module fixes the
//! boundary: an evaluator takes a reference summary and a candidate
//! summary and returns one precision/recall/F-measure triple per overlap
//! granularity. Both extractive and abstractive summaries are valid
//! candidates.

use serde::Serialize;

/// A precision/recall/F-measure triple, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OverlapScore {
    pub precision: f64,
    pub recall: f64,
    pub f_measure: f64,
}

/// Overlap scores per granularity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct OverlapReport {
    /// Single-word overlap.
    pub unigram: OverlapScore,
    /// Word-pair overlap.
    pub bigram: OverlapScore,
    /// Longest-common-subsequence overlap.
    pub lcs: OverlapScore,
}

/// An external text-overlap scoring library.
pub trait QualityEvaluator {
    type Error;

    /// Score `candidate` against `reference`.
    fn evaluate(&self, reference: &str, candidate: &str) -> Result<OverlapReport, Self::Error>;
}
