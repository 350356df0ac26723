//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry. Pass
//! [`NoopObserver`] for zero-overhead execution.

use std::time::{Duration, Instant};

use crate::frequency::WordScores;
use crate::scoring::SentenceScores;
use crate::summarizer::selector::Summary;
use crate::types::Sentence;

/// Stage name: sentence segmentation.
pub const STAGE_SEGMENT: &str = "segment";
/// Stage name: tokenization and content-word filtering.
pub const STAGE_TOKENIZE: &str = "tokenize";
/// Stage name: frequency analysis.
pub const STAGE_FREQUENCY: &str = "frequency";
/// Stage name: per-sentence score aggregation.
pub const STAGE_SCORE: &str = "score";
/// Stage name: top-k selection and reassembly.
pub const STAGE_SELECT: &str = "select";

/// Wall-clock timer for a single stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time elapsed since [`StageClock::start`].
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Metrics for one completed stage: duration plus optional counters.
#[derive(Debug, Clone, Default)]
pub struct StageReport {
    duration: Duration,
    tokens: Option<usize>,
    sentences: Option<usize>,
    selected: Option<usize>,
}

impl StageReport {
    /// A report carrying only a duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Stage wall-clock duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Filtered token count, when the stage produced tokens.
    pub fn tokens(&self) -> Option<usize> {
        self.tokens
    }

    /// Sentence count, when the stage produced sentences.
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Selected sentence count, when the stage selected.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

/// Builder for reports carrying counters.
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    /// Start from a duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    /// Record a filtered token count.
    pub fn tokens(mut self, n: usize) -> Self {
        self.report.tokens = Some(n);
        self
    }

    /// Record a sentence count.
    pub fn sentences(mut self, n: usize) -> Self {
        self.report.sentences = Some(n);
        self
    }

    /// Record a selected sentence count.
    pub fn selected(mut self, n: usize) -> Self {
        self.report.selected = Some(n);
        self
    }

    /// Finish the report.
    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Stage-boundary notifications from a pipeline run.
///
/// All hooks default to no-ops, so implementors override only what they
/// need. Artifact hooks receive borrows; observers must copy anything they
/// want to keep.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// A stage finished with the given metrics.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// The segmenter produced the document's sentences.
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// The filtered token stream is about to enter frequency analysis.
    fn on_filtered_tokens(&mut self, _tokens: &[String]) {}

    /// Normalized word scores were built.
    fn on_word_scores(&mut self, _scores: &WordScores) {}

    /// Per-sentence scores were aggregated.
    fn on_sentence_scores(&mut self, _scores: &SentenceScores) {}

    /// The final summary was assembled.
    fn on_summary(&mut self, _summary: &Summary) {}
}

/// Observer that does nothing — the zero-overhead default.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records a `(stage, report)` pair per stage.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded reports in stage execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_clock_measures_something() {
        let clock = StageClock::start();
        let elapsed = clock.elapsed();
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_report_builder_counters() {
        let report = StageReportBuilder::new(Duration::from_millis(2))
            .tokens(42)
            .sentences(7)
            .build();
        assert_eq!(report.tokens(), Some(42));
        assert_eq!(report.sentences(), Some(7));
        assert_eq!(report.selected(), None);
        assert_eq!(report.duration(), Duration::from_millis(2));
    }

    #[test]
    fn test_plain_report_has_no_counters() {
        let report = StageReport::new(Duration::ZERO);
        assert!(report.tokens().is_none());
        assert!(report.sentences().is_none());
        assert!(report.selected().is_none());
    }

    #[test]
    fn test_timing_observer_records_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_SEGMENT, &StageReport::new(Duration::ZERO));
        obs.on_stage_end(STAGE_SELECT, &StageReport::new(Duration::ZERO));

        let stages: Vec<&str> = obs.reports().iter().map(|(s, _)| *s).collect();
        assert_eq!(stages, vec![STAGE_SEGMENT, STAGE_SELECT]);
    }
}
