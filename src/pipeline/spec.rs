//! Extractor specification types.
//!
//! An [`ExtractorSpec`] is the JSON form of an extractor configuration. It is
//! the input to the [`super::validation::ValidationEngine`], and a valid
//! spec converts into an [`ExtractorConfig`].
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "v": 1,
//!   "language": "si",
//!   "tokenizer": "unicode_words",
//!   "stopwords": "extended",
//!   "max_keywords": 15,
//!   "min_token_len": 3,
//!   "extra_stopwords": ["lorem"],
//!   "strict": false
//! }
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ExtractError;
use crate::types::{
    clamp_max_keywords, ExtractorConfig, Language, StopwordSet, TokenizerKind,
    DEFAULT_MAX_KEYWORDS, DEFAULT_MIN_TOKEN_LEN,
};

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Top-level extractor specification (v1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorSpec {
    /// Spec version (currently `1`).
    pub v: u32,

    /// Language used when a request does not name one.
    #[serde(default)]
    pub language: Option<Language>,

    #[serde(default)]
    pub tokenizer: Option<TokenizerKind>,

    /// Built-in stopword tables (`default` | `extended`).
    #[serde(default)]
    pub stopwords: Option<StopwordSet>,

    /// Default keyword count; clamped into `1..=50` on conversion.
    #[serde(default)]
    pub max_keywords: Option<usize>,

    #[serde(default)]
    pub min_token_len: Option<usize>,

    #[serde(default)]
    pub extra_stopwords: Vec<String>,

    /// If `true`, unrecognized fields are errors; if `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the strict-mode validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for ExtractorSpec {
    fn default() -> Self {
        Self {
            v: SPEC_VERSION,
            language: None,
            tokenizer: None,
            stopwords: None,
            max_keywords: None,
            min_token_len: None,
            extra_stopwords: Vec::new(),
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl ExtractorSpec {
    /// Parse a spec from JSON.
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        serde_json::from_str(json).map_err(|e| ExtractError::InvalidSpec(e.to_string()))
    }

    /// Language to use when none is given, English if unset.
    pub fn default_language(&self) -> Language {
        self.language.unwrap_or(Language::English)
    }

    /// Convert into a runtime configuration. Does not validate; run the
    /// [`ValidationEngine`](super::validation::ValidationEngine) first.
    pub fn to_config(&self) -> ExtractorConfig {
        let config = ExtractorConfig::new()
            .with_max_keywords(clamp_max_keywords(
                self.max_keywords.unwrap_or(DEFAULT_MAX_KEYWORDS),
            ))
            .with_min_token_len(self.min_token_len.unwrap_or(DEFAULT_MIN_TOKEN_LEN))
            .with_tokenizer(self.tokenizer.unwrap_or_default())
            .with_extra_stopwords(
                self.extra_stopwords
                    .iter()
                    .map(|w| w.trim())
                    .filter(|w| !w.is_empty())
                    .map(str::to_string),
            )
            .with_stopwords(self.stopwords.unwrap_or_default());

        match self.language {
            Some(language) => config.with_default_language(language),
            None => config,
        }
    }
}
