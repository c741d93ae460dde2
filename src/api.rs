//! Request/response boundary
//!
//! JSON shapes shared by the HTTP service and the CLI. Kept free of any
//! transport types so they can be used with other frontends.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{ExtractError, Result};
use crate::extractor::KeywordExtractor;
use crate::pipeline::error_code::ErrorCode;
use crate::types::Language;

/// `{ "text": ..., "language": "en"|"si", "max_keywords"?: n }`
///
/// `maxKeywords` is accepted as an alias; `null` means "use the default".
/// Any JSON number is accepted as a count: fractions are truncated and
/// values below 1 end up clamped to 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, alias = "maxKeywords", deserialize_with = "lenient_count")]
    pub max_keywords: Option<usize>,
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number.map(|n| match (n.as_u64(), n.as_i64()) {
        (Some(count), _) => usize::try_from(count).unwrap_or(usize::MAX),
        (None, Some(_)) => 0,
        // `as` saturates: huge values cap at usize::MAX, NaN never reaches here
        (None, None) => n.as_f64().map_or(0, |f| f.max(0.0).trunc() as usize),
    }))
}

impl ExtractRequest {
    pub fn new(text: impl Into<String>, language: Language) -> Self {
        Self {
            text: Some(text.into()),
            language: Some(language.as_str().to_string()),
            max_keywords: None,
        }
    }

    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = Some(max_keywords);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: ErrorCode,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

impl From<&ExtractError> for ErrorResponse {
    fn from(err: &ExtractError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Resolve and run one request.
///
/// The language is, in order: `fixed_language` (the language-specific
/// endpoints), the body's `language` field, the extractor's configured
/// default. With none of them the request fails with `MissingField`.
pub fn handle_extract(
    extractor: &KeywordExtractor,
    request: &ExtractRequest,
    fixed_language: Option<Language>,
) -> Result<ExtractResponse> {
    let language = match (fixed_language, request.language.as_deref()) {
        (Some(language), _) => language,
        (None, Some(tag)) => tag.parse::<Language>()?,
        (None, None) => extractor
            .config()
            .default_language
            .ok_or(ExtractError::MissingField("language"))?,
    };

    let text = request.text.as_deref().unwrap_or_default();
    let max_keywords = request
        .max_keywords
        .unwrap_or(extractor.config().max_keywords);

    let keywords = extractor.extract(text, language, max_keywords)?;
    Ok(ExtractResponse { keywords })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExtractorConfig;

    fn request(json: &str) -> ExtractRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_aliases_and_nulls() {
        let req = request(r#"{ "text": "a", "language": "en", "maxKeywords": 4 }"#);
        assert_eq!(req.max_keywords, Some(4));

        let req = request(r#"{ "text": "a", "max_keywords": null }"#);
        assert_eq!(req.max_keywords, None);
        assert_eq!(req.language, None);
    }

    #[test]
    fn test_request_count_out_of_range() {
        assert_eq!(request(r#"{ "max_keywords": -3 }"#).max_keywords, Some(0));
        assert_eq!(request(r#"{ "max_keywords": 5.0 }"#).max_keywords, Some(5));
        assert_eq!(request(r#"{ "maxKeywords": 2.9 }"#).max_keywords, Some(2));
        assert_eq!(request(r#"{ "max_keywords": -0.5 }"#).max_keywords, Some(0));
        assert_eq!(request(r#"{ "max_keywords": 1e300 }"#).max_keywords, Some(usize::MAX));
        assert!(serde_json::from_str::<ExtractRequest>(r#"{ "max_keywords": "5" }"#).is_err());
    }

    #[test]
    fn test_handle_extract_negative_count_returns_one() {
        let extractor = KeywordExtractor::new();
        let req = request(r#"{ "text": "cat cat dog", "language": "en", "max_keywords": -3 }"#);
        let resp = handle_extract(&extractor, &req, None).unwrap();
        assert_eq!(resp.keywords, vec!["cat"]);
    }

    #[test]
    fn test_handle_extract_uses_configured_language() {
        let extractor = KeywordExtractor::with_config(
            ExtractorConfig::new().with_default_language(Language::Sinhala),
        );
        let req = request(r#"{ "text": "පාසල පොත පාසල" }"#);
        let resp = handle_extract(&extractor, &req, None).unwrap();
        assert_eq!(resp.keywords, vec!["පාසල", "පොත"]);

        // The body still wins over the configured default.
        let req = request(r#"{ "text": "cat cat dog", "language": "en" }"#);
        let resp = handle_extract(&extractor, &req, None).unwrap();
        assert_eq!(resp.keywords, vec!["cat", "dog"]);
    }

    #[test]
    fn test_handle_extract() {
        let extractor = KeywordExtractor::new();
        let req = ExtractRequest::new("the cat sat on the mat the cat ran", Language::English)
            .with_max_keywords(3);

        let resp = handle_extract(&extractor, &req, None).unwrap();
        assert_eq!(resp.keywords, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_handle_extract_missing_language() {
        let extractor = KeywordExtractor::new();
        let req = request(r#"{ "text": "hello world" }"#);
        assert_eq!(
            handle_extract(&extractor, &req, None),
            Err(ExtractError::MissingField("language"))
        );
        // A fixed language makes the field optional.
        assert!(handle_extract(&extractor, &req, Some(Language::English)).is_ok());
    }

    #[test]
    fn test_handle_extract_unsupported_language() {
        let extractor = KeywordExtractor::new();
        let req = request(r#"{ "text": "bonjour le monde", "language": "fr" }"#);
        let err = handle_extract(&extractor, &req, None).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnsupportedLanguage);
    }

    #[test]
    fn test_handle_extract_missing_text_is_empty_input() {
        let extractor = KeywordExtractor::new();
        let req = request(r#"{ "language": "si" }"#);
        assert_eq!(
            handle_extract(&extractor, &req, None),
            Err(ExtractError::EmptyInput)
        );
    }

    #[test]
    fn test_error_response_json() {
        let resp = ErrorResponse::from(&ExtractError::EmptyInput);
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"], "input text is empty");
        assert_eq!(json["code"], "empty_input");
    }
}
