//! Core error types.
//!
//! All three variants are local-precondition violations, not transient
//! failures — there is nothing to retry. They surface immediately to the
//! caller: a degenerate numeric result (division by a zero maximum) would
//! silently corrupt every downstream score.

use thiserror::Error;

/// Errors raised by the core summarization operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// Frequency analysis was invoked with zero tokens; there is no maximum
    /// count to normalize against.
    #[error("frequency analysis requires at least one token")]
    EmptyInput,

    /// Selection was requested with a non-positive sentence count.
    #[error("summary length must be positive, got {0}")]
    InvalidLength(usize),

    /// Selection was invoked with zero sentences.
    #[error("document contains no sentences")]
    EmptyDocument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SummarizeError::EmptyInput.to_string(),
            "frequency analysis requires at least one token"
        );
        assert_eq!(
            SummarizeError::InvalidLength(0).to_string(),
            "summary length must be positive, got 0"
        );
        assert_eq!(
            SummarizeError::EmptyDocument.to_string(),
            "document contains no sentences"
        );
    }
}
