//! Extraction errors.

use thiserror::Error;

use crate::pipeline::error_code::ErrorCode;

/// Errors surfaced by the extractor and its request boundary.
///
/// Finding no keywords is not an error; it yields an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("input text is empty")]
    EmptyInput,

    #[error("unsupported language \"{0}\" (expected \"en\" or \"si\")")]
    UnsupportedLanguage(String),

    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    #[error("invalid extractor spec: {0}")]
    InvalidSpec(String),
}

impl ExtractError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyInput => ErrorCode::EmptyInput,
            Self::UnsupportedLanguage(_) => ErrorCode::UnsupportedLanguage,
            Self::MissingField(_) => ErrorCode::MissingField,
            Self::InvalidSpec(_) => ErrorCode::ValidationFailed,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ExtractError::EmptyInput.code(), ErrorCode::EmptyInput);
        assert_eq!(
            ExtractError::UnsupportedLanguage("fr".into()).code(),
            ErrorCode::UnsupportedLanguage
        );
        assert_eq!(
            ExtractError::MissingField("language").code(),
            ErrorCode::MissingField
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ExtractError::EmptyInput.to_string(), "input text is empty");
        assert!(ExtractError::UnsupportedLanguage("fr".into())
            .to_string()
            .contains("\"fr\""));
    }
}
