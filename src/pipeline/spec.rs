//! Summarization request specification.
//!
//! A [`SummarySpec`] describes one summarization job: which mode to run,
//! the language and length knobs, and runtime limits. These types are the
//! input to the [`super::validation::ValidationEngine`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "mode": "extractive",
//!   "language": "en",
//!   "num_sentences": 3,
//!   "generation": { "min_length": 30, "max_length": 120 },
//!   "runtime": { "max_tokens": 200000 },
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::SummaryConfig;

/// Top-level summarization request (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Summary source to run. Omitted defaults to extractive.
    #[serde(default)]
    pub mode: Option<SummaryMode>,

    /// Stopword-list language for the built-in tokenizer adapter.
    #[serde(default)]
    pub language: Option<String>,

    /// Number of sentences to select (extractive mode).
    #[serde(default)]
    pub num_sentences: Option<usize>,

    /// Generation bounds (abstractive mode).
    #[serde(default)]
    pub generation: Option<GenerationSpec>,

    /// Runtime execution limits.
    #[serde(default)]
    pub runtime: RuntimeSpec,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl SummarySpec {
    /// Resolve the runtime config for the extractive pipeline, filling
    /// omitted fields with defaults.
    pub fn config(&self) -> SummaryConfig {
        let defaults = SummaryConfig::default();
        SummaryConfig {
            language: self.language.clone().unwrap_or(defaults.language),
            num_sentences: self.num_sentences.unwrap_or(defaults.num_sentences),
        }
    }
}

/// Which summary source to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryMode {
    /// Score and select original sentences (the core pipeline).
    Extractive,
    /// Delegate to an external pretrained generation model.
    Abstractive,
}

impl SummaryMode {
    /// The user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extractive => "extractive",
            Self::Abstractive => "abstractive",
        }
    }
}

/// Length bounds for abstractive generation, in generated tokens.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationSpec {
    #[serde(default)]
    pub min_length: Option<usize>,

    #[serde(default)]
    pub max_length: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Runtime execution limits (fail-fast guards).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Maximum number of input tokens before rejecting the document.
    #[serde(default)]
    pub max_tokens: Option<usize>,

    /// Captures any fields not recognized by the schema.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}
