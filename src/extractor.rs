//! Keyword extractor
//!
//! [`KeywordExtractor`] is the public entry point: it validates input,
//! clamps the requested count, and runs the [`KeywordPipeline`]. It holds no
//! per-call state, so one instance can serve any number of threads.

use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::errors::{ExtractError, Result};
use crate::pipeline::observer::{NoopObserver, PipelineObserver};
use crate::pipeline::runner::KeywordPipeline;
use crate::pipeline::spec::ExtractorSpec;
use crate::pipeline::validation::ValidationEngine;
use crate::types::{clamp_max_keywords, ExtractorConfig, Language, ScoredKeyword};

static DEFAULT_EXTRACTOR: Lazy<KeywordExtractor> = Lazy::new(KeywordExtractor::new);

/// Extract up to `max_keywords` keywords with the default configuration.
pub fn extract_keywords(text: &str, language: Language, max_keywords: usize) -> Result<Vec<String>> {
    DEFAULT_EXTRACTOR.extract(text, language, max_keywords)
}

/// Frequency-based keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    config: ExtractorConfig,
    pipeline: KeywordPipeline,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Extractor with the default configuration
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    pub fn with_config(config: ExtractorConfig) -> Self {
        let pipeline = KeywordPipeline::from_config(&config);
        Self { config, pipeline }
    }

    /// Build from a spec, rejecting it if validation reports any error.
    pub fn from_spec(spec: &ExtractorSpec) -> Result<Self> {
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let report = ValidationEngine::with_defaults().validate(spec).into_result()?;

        #[cfg(feature = "tracing")]
        for warning in report.warnings() {
            tracing::warn!(%warning, "extractor spec warning");
        }

        Ok(Self::with_config(spec.to_config()))
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract up to `max_keywords` keywords (clamped into `1..=50`).
    ///
    /// Fails with [`ExtractError::EmptyInput`] if `text` is blank. Text with
    /// no qualifying tokens yields an empty vector.
    pub fn extract(&self, text: &str, language: Language, max_keywords: usize) -> Result<Vec<String>> {
        self.extract_scored(text, language, max_keywords)
            .map(|keywords| keywords.into_iter().map(|k| k.term).collect())
    }

    /// [`extract`](Self::extract) using the configured default count.
    pub fn extract_default(&self, text: &str, language: Language) -> Result<Vec<String>> {
        self.extract(text, language, self.config.max_keywords)
    }

    /// Like [`extract`](Self::extract) but keeps counts and first positions.
    pub fn extract_scored(
        &self,
        text: &str,
        language: Language,
        max_keywords: usize,
    ) -> Result<Vec<ScoredKeyword>> {
        self.extract_with_observer(text, language, max_keywords, &mut NoopObserver)
    }

    /// Run extraction while reporting stage boundaries to `observer`.
    pub fn extract_with_observer(
        &self,
        text: &str,
        language: Language,
        max_keywords: usize,
        observer: &mut impl PipelineObserver,
    ) -> Result<Vec<ScoredKeyword>> {
        if text.trim().is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let limit = clamp_max_keywords(max_keywords);
        let output = self
            .pipeline
            .run(text, language, limit, &self.config, observer);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            language = %language,
            limit,
            distinct = output.distinct,
            returned = output.len(),
            "extracted keywords"
        );

        Ok(output.keywords)
    }

    /// Extract from many texts in parallel. Results are in input order.
    pub fn extract_batch<S>(
        &self,
        texts: &[S],
        language: Language,
        max_keywords: usize,
    ) -> Vec<Result<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.extract(text.as_ref(), language, max_keywords))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StopwordSet, TokenizerKind};

    #[test]
    fn test_extract_scenario() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor
            .extract("the cat sat on the mat the cat ran", Language::English, 3)
            .unwrap();
        assert_eq!(keywords, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn test_blank_input_is_error() {
        let extractor = KeywordExtractor::new();
        assert_eq!(
            extractor.extract("   ", Language::English, 10),
            Err(ExtractError::EmptyInput)
        );
        assert_eq!(
            extractor.extract("\n\t", Language::Sinhala, 10),
            Err(ExtractError::EmptyInput)
        );
    }

    #[test]
    fn test_no_qualifying_tokens_is_empty_ok() {
        let extractor = KeywordExtractor::new();
        assert_eq!(extractor.extract("123 456 789", Language::English, 10), Ok(vec![]));
        assert_eq!(
            extractor.extract("only latin words here", Language::Sinhala, 10),
            Ok(vec![])
        );
    }

    #[test]
    fn test_max_keywords_clamped() {
        let extractor = KeywordExtractor::new();
        // Zero is raised to one.
        let keywords = extractor
            .extract("alpha beta gamma", Language::English, 0)
            .unwrap();
        assert_eq!(keywords, vec!["alpha"]);
    }

    #[test]
    fn test_extract_default_uses_config() {
        let extractor = KeywordExtractor::with_config(ExtractorConfig::new().with_max_keywords(2));
        let keywords = extractor
            .extract_default("alpha beta gamma delta", Language::English)
            .unwrap();
        assert_eq!(keywords, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_extract_scored() {
        let extractor = KeywordExtractor::new();
        let scored = extractor
            .extract_scored("rust cargo rust crate cargo rust", Language::English, 10)
            .unwrap();
        assert_eq!(
            scored,
            vec![
                ScoredKeyword::new("rust", 3, 0),
                ScoredKeyword::new("cargo", 2, 1),
                ScoredKeyword::new("crate", 1, 3),
            ]
        );
    }

    #[test]
    fn test_sinhala_extraction() {
        let extractor = KeywordExtractor::new();
        let keywords = extractor
            .extract("පාසල පොත පාසල සඳහා ගුරුවරයා", Language::Sinhala, 10)
            .unwrap();
        assert_eq!(keywords, vec!["පාසල", "පොත", "ගුරුවරයා"]);
    }

    #[test]
    fn test_from_spec() {
        let spec = ExtractorSpec::from_json(
            r#"{ "v": 1, "tokenizer": "unicode_words", "max_keywords": 5 }"#,
        )
        .unwrap();
        let extractor = KeywordExtractor::from_spec(&spec).unwrap();
        assert_eq!(extractor.config().tokenizer, TokenizerKind::UnicodeWords);
        assert_eq!(extractor.config().max_keywords, 5);
    }

    #[test]
    fn test_from_invalid_spec() {
        let spec = ExtractorSpec::from_json(r#"{ "v": 1, "max_keywords": 0 }"#).unwrap();
        let err = KeywordExtractor::from_spec(&spec).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSpec(msg) if msg.contains("/max_keywords")));
    }

    #[test]
    fn test_from_spec_rejects_short_min_token_len() {
        let spec = ExtractorSpec::from_json(r#"{ "v": 1, "min_token_len": 2 }"#).unwrap();
        let err = KeywordExtractor::from_spec(&spec).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidSpec(msg) if msg.contains("/min_token_len")));

        let short = KeywordExtractor::with_config(ExtractorConfig::new().with_min_token_len(1));
        let keywords = short.extract("ox ox ox cat", Language::English, 10).unwrap();
        assert_eq!(keywords, vec!["cat"]);
    }

    #[test]
    fn test_from_spec_carries_language_and_stopwords() {
        let spec = ExtractorSpec::from_json(r#"{ "v": 1, "language": "si", "stopwords": "extended" }"#)
            .unwrap();
        let extractor = KeywordExtractor::from_spec(&spec).unwrap();
        assert_eq!(extractor.config().default_language, Some(Language::Sinhala));
        assert_eq!(extractor.config().stopwords, StopwordSet::Extended);
    }

    #[test]
    fn test_extended_stopwords_only_remove_terms() {
        let text = "also would however the cat sat cat really mat quite";
        let default = KeywordExtractor::new()
            .extract(text, Language::English, 50)
            .unwrap();
        let extended = KeywordExtractor::with_config(
            ExtractorConfig::new().with_stopwords(StopwordSet::Extended),
        )
        .extract(text, Language::English, 50)
        .unwrap();

        assert!(extended.len() <= default.len());
        let kept: Vec<_> = default.iter().filter(|t| extended.contains(t)).collect();
        assert_eq!(kept, extended.iter().collect::<Vec<_>>());
        assert!(extended.contains(&"cat".to_string()));
    }

    #[test]
    fn test_extract_batch_preserves_order() {
        let extractor = KeywordExtractor::new();
        let texts = ["apple apple pear", "   ", "plum"];
        let results = extractor.extract_batch(&texts, Language::English, 10);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(vec!["apple".to_string(), "pear".to_string()]));
        assert_eq!(results[1], Err(ExtractError::EmptyInput));
        assert_eq!(results[2], Ok(vec!["plum".to_string()]));
    }

    #[test]
    fn test_free_function() {
        assert_eq!(
            extract_keywords("data data science", Language::English, 10).unwrap(),
            vec!["data", "science"]
        );
    }
}
