//! Frequency-based extractive summarization.
//!
//! `rapid-summarize` extracts a short summary from a document by scoring
//! and selecting original sentences — it never generates text. Each word's
//! importance is its occurrence count normalized by the document's maximum
//! count; each sentence scores the sum of its words; the top `k` sentences
//! are selected deterministically and reassembled in document order.
//!
//! # Quick start
//!
//! ```
//! use rapid_summarize::pipeline::runner::PipelineBuilder;
//!
//! let pipeline = PipelineBuilder::new().num_sentences(1).build();
//! let summary = pipeline
//!     .summarize("The war lasted four years. The war changed Germany. Gardens bloom quietly.")
//!     .unwrap();
//! assert_eq!(summary.len(), 1);
//! ```
//!
//! # Architecture
//!
//! - [`nlp`] — the tokenizer/segmenter capability interface, a built-in
//!   Unicode adapter, and stopword filtering
//! - [`frequency`] — normalized word scores
//! - [`scoring`] — per-sentence score aggregation
//! - [`summarizer`] — deterministic top-k selection and the [`Summary`]
//!   artifact
//! - [`pipeline`] — the stage runner, observer hooks, and the request
//!   spec + validation engine
//! - [`abstractive`], [`eval`] — contracts for the external generation and
//!   evaluation collaborators; the core implements neither
//!
//! Runs are independent and stateless: each owns its own score maps, so
//! documents may be summarized fully in parallel
//! ([`Pipeline::summarize_batch`](pipeline::runner::Pipeline::summarize_batch)).

pub mod abstractive;
pub mod errors;
pub mod eval;
pub mod frequency;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;

pub use errors::SummarizeError;
pub use frequency::{FrequencyAnalyzer, WordScores};
pub use nlp::tokenizer::{Tokenizer, UnicodeTokenizer};
pub use pipeline::runner::{Pipeline, PipelineBuilder};
pub use scoring::{SentenceScorer, SentenceScores};
pub use summarizer::selector::{SentenceSelector, Summary};
pub use types::{Sentence, SummaryConfig, Token};
