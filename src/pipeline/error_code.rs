//! Stable machine-readable codes for spec validation diagnostics.

use std::fmt;

use serde::Serialize;

/// Machine-readable category of a spec diagnostic.
///
/// Codes are part of the serialized report contract; renaming one is a
/// breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Requested summary length is not positive.
    InvalidLength,
    /// Generation bounds are empty or inverted.
    InvalidBounds,
    /// A runtime execution limit is set to zero.
    InvalidLimit,
    /// A field not recognized by the schema.
    UnknownField,
    /// A language with no bundled stopword list.
    UnknownLanguage,
}

impl ErrorCode {
    /// The user-facing name used in JSON and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidLength => "invalid_length",
            Self::InvalidBounds => "invalid_bounds",
            Self::InvalidLimit => "invalid_limit",
            Self::UnknownField => "unknown_field",
            Self::UnknownLanguage => "unknown_language",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
