//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`Pipeline`] holds the tokenizer adapter and the three core stages.
//! Calling [`Pipeline::run`] executes segment → tokenize → frequency →
//! score → select, threading artifacts between stages and notifying a
//! [`PipelineObserver`] at each boundary.
//!
//! Each run owns its own word and sentence score maps — scores are only
//! meaningful relative to one document's frequency distribution — so
//! independent documents may be summarized fully in parallel
//! ([`Pipeline::summarize_batch`]).

use rayon::prelude::*;

use crate::errors::SummarizeError;
use crate::frequency::FrequencyAnalyzer;
use crate::nlp::content_words;
use crate::nlp::tokenizer::{Tokenizer, UnicodeTokenizer};
use crate::pipeline::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReport, StageReportBuilder, STAGE_FREQUENCY,
    STAGE_SCORE, STAGE_SEGMENT, STAGE_SELECT, STAGE_TOKENIZE,
};
use crate::pipeline::spec::SummarySpec;
use crate::pipeline::validation::{ValidationEngine, ValidationReport};
use crate::scoring::SentenceScorer;
use crate::summarizer::selector::{SentenceSelector, Summary};
use crate::types::SummaryConfig;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

// ============================================================================
// Pipeline
// ============================================================================

/// The extractive summarization pipeline.
///
/// Generic over the tokenizer adapter so any NLP toolkit can drive it; the
/// three core stages are zero-sized and fixed.
#[derive(Debug, Clone)]
pub struct Pipeline<T = UnicodeTokenizer> {
    pub tokenizer: T,
    pub analyzer: FrequencyAnalyzer,
    pub scorer: SentenceScorer,
    pub selector: SentenceSelector,
    pub config: SummaryConfig,
}

impl Pipeline<UnicodeTokenizer> {
    /// Build the default extractive pipeline: built-in Unicode adapter,
    /// English stopwords, three-sentence summaries.
    pub fn extractive() -> Self {
        Self::with_config(SummaryConfig::default())
    }

    /// Build a pipeline from a config, wiring the built-in adapter to the
    /// config's language.
    pub fn with_config(config: SummaryConfig) -> Self {
        Pipeline {
            tokenizer: UnicodeTokenizer::new(&config.language),
            analyzer: FrequencyAnalyzer::new(),
            scorer: SentenceScorer::new(),
            selector: SentenceSelector::new(),
            config,
        }
    }

    /// Validate a request spec and build the extractive pipeline it
    /// describes.
    ///
    /// Returns the full validation report when any rule reports an error;
    /// warnings alone do not block construction.
    pub fn from_spec(spec: &SummarySpec) -> Result<Self, ValidationReport> {
        let report = ValidationEngine::with_defaults().validate(spec);
        if report.has_errors() {
            return Err(report);
        }
        Ok(Self::with_config(spec.config()))
    }
}

impl<T: Tokenizer> Pipeline<T> {
    /// Execute the pipeline on one document.
    ///
    /// Stages run in order:
    /// 1. Segment the document into sentences
    /// 2. Tokenize and filter to content words
    /// 3. Build normalized word scores
    /// 4. Aggregate a score per sentence
    /// 5. Select the top `num_sentences` and reassemble in document order
    ///
    /// The `observer` receives callbacks at each stage boundary. Pass
    /// [`NoopObserver`] for zero-overhead execution.
    ///
    /// # Errors
    ///
    /// [`SummarizeError::EmptyInput`] when the document yields no content
    /// words (empty text, or nothing but stopwords and punctuation);
    /// [`SummarizeError::InvalidLength`] when the configured sentence count
    /// is zero.
    pub fn run(
        &self,
        text: &str,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary, SummarizeError> {
        // Stage 0: segment
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = self.tokenizer.segment(text);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .build();
        observer.on_stage_end(STAGE_SEGMENT, &report);
        observer.on_sentences(&sentences);

        // Stage 1: tokenize + filter
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let tokens = self.tokenizer.tokenize(text);
        let filtered = content_words(&tokens);
        let report = StageReportBuilder::new(clock.elapsed())
            .tokens(filtered.len())
            .build();
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_filtered_tokens(&filtered);

        // Stage 2: frequency analysis
        trace_stage!(STAGE_FREQUENCY);
        observer.on_stage_start(STAGE_FREQUENCY);
        let clock = StageClock::start();
        let word_scores = self.analyzer.analyze(&filtered)?;
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_FREQUENCY, &report);
        observer.on_word_scores(&word_scores);

        // Stage 3: sentence scoring
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let sentence_scores = self.scorer.score(&sentences, &word_scores, &self.tokenizer);
        let report = StageReport::new(clock.elapsed());
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_sentence_scores(&sentence_scores);

        // Stage 4: selection
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let summary =
            self.selector
                .select(&sentences, &sentence_scores, self.config.num_sentences)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .selected(summary.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_summary(&summary);

        Ok(summary)
    }

    /// Summarize one document without observation.
    pub fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        self.run(text, &mut NoopObserver)
    }
}

impl<T: Tokenizer + Sync> Pipeline<T> {
    /// Summarize independent documents in parallel.
    ///
    /// Each document gets its own run and its own score maps; results come
    /// back in input order, one per document, errors included.
    pub fn summarize_batch(&self, documents: &[&str]) -> Vec<Result<Summary, SummarizeError>> {
        documents
            .par_iter()
            .map(|doc| self.summarize(doc))
            .collect()
    }
}

// ============================================================================
// PipelineBuilder
// ============================================================================

/// Fluent builder for constructing a [`Pipeline`] with custom parts.
///
/// ```
/// use rapid_summarize::pipeline::runner::PipelineBuilder;
///
/// let pipeline = PipelineBuilder::new()
///     .language("de")
///     .num_sentences(2)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct PipelineBuilder<T = UnicodeTokenizer> {
    tokenizer: T,
    config: SummaryConfig,
}

impl PipelineBuilder {
    /// Start from the default extractive configuration.
    pub fn new() -> Self {
        PipelineBuilder {
            tokenizer: UnicodeTokenizer::default(),
            config: SummaryConfig::default(),
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineBuilder<UnicodeTokenizer> {
    /// Set the language, rebuilding the built-in adapter's stopword list.
    pub fn language(mut self, language: &str) -> Self {
        self.config.language = language.to_string();
        self.tokenizer = UnicodeTokenizer::new(language);
        self
    }
}

impl<T: Tokenizer> PipelineBuilder<T> {
    /// Set the number of sentences to select.
    pub fn num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    /// Replace the tokenizer adapter.
    pub fn tokenizer<U: Tokenizer>(self, tokenizer: U) -> PipelineBuilder<U> {
        PipelineBuilder {
            tokenizer,
            config: self.config,
        }
    }

    /// Consume the builder and produce a [`Pipeline`].
    pub fn build(self) -> Pipeline<T> {
        Pipeline {
            tokenizer: self.tokenizer,
            analyzer: FrequencyAnalyzer::new(),
            scorer: SentenceScorer::new(),
            selector: SentenceSelector::new(),
            config: self.config,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
