//! Stable error codes shared by extraction errors and spec diagnostics.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable error code, serialized as `snake_case`.
///
/// Codes are part of the JSON contract; existing variants must not be
/// renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Input text was blank after trimming.
    EmptyInput,
    /// Language tag outside the supported set.
    UnsupportedLanguage,
    /// A required request field was absent.
    MissingField,
    /// Request body could not be parsed.
    MalformedRequest,
    /// Spec version not understood.
    UnsupportedVersion,
    /// A field holds a value outside its allowed range.
    InvalidValue,
    /// Field not recognized by the spec schema.
    UnknownField,
    /// Catch-all for failed validation.
    ValidationFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::UnsupportedLanguage => "unsupported_language",
            Self::MissingField => "missing_field",
            Self::MalformedRequest => "malformed_request",
            Self::UnsupportedVersion => "unsupported_version",
            Self::InvalidValue => "invalid_value",
            Self::UnknownField => "unknown_field",
            Self::ValidationFailed => "validation_failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
