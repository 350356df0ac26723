//! Spec validation diagnostics.

use serde::Serialize;
use thiserror::Error;

use super::error_code::ErrorCode;

/// A single spec diagnostic: a stable code, the JSON path it applies to, a
/// human-readable message, and an optional remediation hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{code} at `{path}`: {message}")]
pub struct SummarySpecError {
    /// Machine-readable category.
    pub code: ErrorCode,
    /// JSON path of the offending field (e.g. `generation.max_length`).
    pub path: String,
    /// Human-readable description of the problem.
    pub message: String,
    /// Optional remediation hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl SummarySpecError {
    /// Create a diagnostic.
    pub fn new(
        code: ErrorCode,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<&str>,
    ) -> Self {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            hint: hint.map(str::to_string),
        }
    }
}
