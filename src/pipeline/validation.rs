//! Validation engine for summarization request specs.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SummarySpec`] and collects every diagnostic into a
//! [`ValidationReport`] — it never short-circuits on the first error, so
//! callers see all problems at once.
//!
//! # Quick start
//!
//! ```
//! use rapid_summarize::pipeline::spec::SummarySpec;
//! use rapid_summarize::pipeline::validation::ValidationEngine;
//!
//! let spec: SummarySpec = serde_json::from_str(r#"{ "v": 1, "num_sentences": 0 }"#).unwrap();
//! let report = ValidationEngine::with_defaults().validate(&spec);
//! assert!(report.has_errors());
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::SummarySpecError;
use super::spec::SummarySpec;
use crate::nlp::stopwords::StopwordFilter;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to a
/// [`SummarySpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: SummarySpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: SummarySpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: SummarySpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &SummarySpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &SummarySpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Whether any error-severity diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    fn push(&mut self, diagnostic: ValidationDiagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

// ─── Rules ──────────────────────────────────────────────────────────────────

/// A single validation rule over a [`SummarySpec`].
pub trait ValidationRule {
    /// Append this rule's diagnostics to the report.
    fn check(&self, spec: &SummarySpec, report: &mut ValidationReport);
}

/// Rejects a non-positive sentence count.
pub struct SentenceCountRule;

impl ValidationRule for SentenceCountRule {
    fn check(&self, spec: &SummarySpec, report: &mut ValidationReport) {
        if spec.num_sentences == Some(0) {
            report.push(ValidationDiagnostic::error(SummarySpecError::new(
                ErrorCode::InvalidLength,
                "num_sentences",
                "summary length must be positive",
                Some("request at least one sentence"),
            )));
        }
    }
}

/// Rejects empty or inverted generation bounds.
pub struct GenerationBoundsRule;

impl ValidationRule for GenerationBoundsRule {
    fn check(&self, spec: &SummarySpec, report: &mut ValidationReport) {
        let Some(generation) = &spec.generation else {
            return;
        };
        if generation.max_length == Some(0) {
            report.push(ValidationDiagnostic::error(SummarySpecError::new(
                ErrorCode::InvalidBounds,
                "generation.max_length",
                "maximum generation length must be positive",
                None,
            )));
        }
        if let (Some(min), Some(max)) = (generation.min_length, generation.max_length) {
            if min > max {
                report.push(ValidationDiagnostic::error(SummarySpecError::new(
                    ErrorCode::InvalidBounds,
                    "generation",
                    format!("min_length {min} exceeds max_length {max}"),
                    Some("swap or widen the bounds"),
                )));
            }
        }
    }
}

/// Rejects zero runtime limits — a limit of zero would reject every input.
pub struct RuntimeLimitRule;

impl ValidationRule for RuntimeLimitRule {
    fn check(&self, spec: &SummarySpec, report: &mut ValidationReport) {
        if spec.runtime.max_tokens == Some(0) {
            report.push(ValidationDiagnostic::error(SummarySpecError::new(
                ErrorCode::InvalidLimit,
                "runtime.max_tokens",
                "token limit must be positive",
                Some("omit the field to disable the limit"),
            )));
        }
    }
}

/// Flags fields the schema does not recognize. Errors under `strict`,
/// warnings otherwise.
pub struct UnknownFieldRule;

impl UnknownFieldRule {
    fn flag(spec: &SummarySpec, path: String, report: &mut ValidationReport) {
        let err = SummarySpecError::new(
            ErrorCode::UnknownField,
            path,
            "field not recognized by the schema",
            Some("check the spelling against the v1 spec shape"),
        );
        if spec.strict {
            report.push(ValidationDiagnostic::error(err));
        } else {
            report.push(ValidationDiagnostic::warning(err));
        }
    }
}

impl ValidationRule for UnknownFieldRule {
    fn check(&self, spec: &SummarySpec, report: &mut ValidationReport) {
        for field in spec.unknown_fields.keys() {
            Self::flag(spec, field.clone(), report);
        }
        if let Some(generation) = &spec.generation {
            for field in generation.unknown_fields.keys() {
                Self::flag(spec, format!("generation.{field}"), report);
            }
        }
        for field in spec.runtime.unknown_fields.keys() {
            Self::flag(spec, format!("runtime.{field}"), report);
        }
    }
}

/// Warns when no stopword list is bundled for the requested language.
/// The built-in adapter falls back to English, so this is not an error.
pub struct LanguageRule;

impl ValidationRule for LanguageRule {
    fn check(&self, spec: &SummarySpec, report: &mut ValidationReport) {
        if let Some(language) = &spec.language {
            if !StopwordFilter::is_known_language(language) {
                report.push(ValidationDiagnostic::warning(SummarySpecError::new(
                    ErrorCode::UnknownLanguage,
                    "language",
                    format!("no bundled stopword list for `{language}`"),
                    Some("the built-in tokenizer falls back to English stopwords"),
                )));
            }
        }
    }
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs every registered rule and collects all diagnostics.
#[derive(Default)]
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// An engine with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with the full default rule set.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_rule(SentenceCountRule)
            .with_rule(GenerationBoundsRule)
            .with_rule(RuntimeLimitRule)
            .with_rule(UnknownFieldRule)
            .with_rule(LanguageRule)
    }

    /// Register an additional rule.
    pub fn with_rule(mut self, rule: impl ValidationRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Run all rules; never short-circuits.
    pub fn validate(&self, spec: &SummarySpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            rule.check(spec, &mut report);
        }
        report
    }
}
