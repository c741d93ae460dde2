//! Core types shared across the crate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ExtractError;

/// Number of keywords returned when the caller does not ask for a count.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Upper bound for any requested keyword count.
pub const MAX_KEYWORDS_CAP: usize = 50;

/// Shortest token (in characters) that may become a keyword.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Clamp a requested keyword count into `1..=MAX_KEYWORDS_CAP`.
pub fn clamp_max_keywords(requested: usize) -> usize {
    requested.clamp(1, MAX_KEYWORDS_CAP)
}

/// Languages the extractor knows how to tokenize and filter.
///
/// The set is closed: an unknown tag is rejected, never mapped to a
/// fallback language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "si")]
    Sinhala,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 2] = [Language::English, Language::Sinhala];

    /// The short tag (`en`, `si`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Sinhala => "si",
        }
    }

    /// Message shown when extraction succeeds but nothing qualifies.
    pub fn no_keywords_message(&self) -> &'static str {
        match self {
            Language::English => {
                "No keywords found in the text. Try adding more descriptive content."
            }
            Language::Sinhala => {
                "පෙළෙහි මුල් පද හමු නොවීය. වැඩි විස්තරාත්මක අන්තර්ගතයක් එකතු කිරීමට උත්සාහ කරන්න."
            }
        }
    }

    /// Message shown when the input is blank.
    pub fn empty_input_message(&self) -> &'static str {
        match self {
            Language::English => "Please enter text to analyze",
            Language::Sinhala => "කරුණාකර විශ්ලේෂණය කිරීමට පෙළ ඇතුළත් කරන්න",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ExtractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "si" | "sinhala" => Ok(Language::Sinhala),
            _ => Err(ExtractError::UnsupportedLanguage(value.to_string())),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = ExtractError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Which tokenizer splits the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    /// Split on a fixed set of whitespace and punctuation characters.
    #[default]
    Delimiter,
    /// Split on Unicode word boundaries (UAX #29).
    UnicodeWords,
}

impl TokenizerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delimiter => "delimiter",
            Self::UnicodeWords => "unicode_words",
        }
    }
}

impl FromStr for TokenizerKind {
    type Err = ExtractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "delimiter" | "regex" => Ok(Self::Delimiter),
            "unicode_words" | "unicode-words" | "unicode" => Ok(Self::UnicodeWords),
            other => Err(ExtractError::InvalidSpec(format!(
                "unknown tokenizer \"{other}\""
            ))),
        }
    }
}

/// Which built-in stopword tables back the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSet {
    /// NLTK English list and the curated Sinhala list.
    #[default]
    Default,
    /// Adds the stopwords-iso English list; Sinhala is unchanged.
    Extended,
}

impl StopwordSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Extended => "extended",
        }
    }
}

impl FromStr for StopwordSet {
    type Err = ExtractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "default" | "nltk" => Ok(Self::Default),
            "extended" | "iso" => Ok(Self::Extended),
            other => Err(ExtractError::InvalidSpec(format!(
                "unknown stopword set \"{other}\""
            ))),
        }
    }
}

/// Extractor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Keywords returned when a call does not specify a count
    pub max_keywords: usize,
    /// Minimum token length in characters
    pub min_token_len: usize,
    /// Tokenization strategy
    pub tokenizer: TokenizerKind,
    /// Built-in stopword tables
    pub stopwords: StopwordSet,
    /// Stopwords added on top of the built-in tables (applied to every language)
    pub extra_stopwords: Vec<String>,
    /// Language for requests that do not name one
    pub default_language: Option<Language>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            tokenizer: TokenizerKind::default(),
            stopwords: StopwordSet::default(),
            extra_stopwords: Vec::new(),
            default_language: None,
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default keyword count (clamped into the supported range)
    pub fn with_max_keywords(mut self, max_keywords: usize) -> Self {
        self.max_keywords = clamp_max_keywords(max_keywords);
        self
    }

    /// Set the minimum token length; never below [`DEFAULT_MIN_TOKEN_LEN`]
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len.max(DEFAULT_MIN_TOKEN_LEN);
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: TokenizerKind) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = Some(language);
        self
    }

    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }
}

/// A ranked keyword with the statistics that placed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredKeyword {
    /// Normalized term
    pub term: String,
    /// Occurrences in the input
    pub count: usize,
    /// Position of the first occurrence in the token stream
    pub first_index: usize,
}

impl ScoredKeyword {
    pub fn new(term: impl Into<String>, count: usize, first_index: usize) -> Self {
        Self {
            term: term.into(),
            count,
            first_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_parse() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("SI".parse::<Language>().unwrap(), Language::Sinhala);
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!(
            "fr".parse::<Language>(),
            Err(ExtractError::UnsupportedLanguage("fr".into()))
        );
    }

    #[test]
    fn test_language_serde() {
        let lang: Language = serde_json::from_str("\"si\"").unwrap();
        assert_eq!(lang, Language::Sinhala);
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        assert!(serde_json::from_str::<Language>("\"de\"").is_err());
    }

    #[test]
    fn test_clamp_max_keywords() {
        assert_eq!(clamp_max_keywords(0), 1);
        assert_eq!(clamp_max_keywords(10), 10);
        assert_eq!(clamp_max_keywords(500), MAX_KEYWORDS_CAP);
    }

    #[test]
    fn test_config_builder() {
        let cfg = ExtractorConfig::new()
            .with_max_keywords(99)
            .with_min_token_len(5)
            .with_tokenizer(TokenizerKind::UnicodeWords)
            .with_stopwords(StopwordSet::Extended)
            .with_default_language(Language::Sinhala)
            .with_extra_stopwords(["foo"]);

        assert_eq!(cfg.max_keywords, 50);
        assert_eq!(cfg.min_token_len, 5);
        assert_eq!(cfg.tokenizer, TokenizerKind::UnicodeWords);
        assert_eq!(cfg.stopwords, StopwordSet::Extended);
        assert_eq!(cfg.default_language, Some(Language::Sinhala));
        assert_eq!(cfg.extra_stopwords, vec!["foo".to_string()]);
    }

    #[test]
    fn test_min_token_len_never_below_three() {
        for requested in [0, 1, 2] {
            let cfg = ExtractorConfig::new().with_min_token_len(requested);
            assert_eq!(cfg.min_token_len, DEFAULT_MIN_TOKEN_LEN);
        }
    }

    #[test]
    fn test_stopword_set_parse() {
        assert_eq!("Extended".parse::<StopwordSet>().unwrap(), StopwordSet::Extended);
        assert_eq!("nltk".parse::<StopwordSet>().unwrap(), StopwordSet::Default);
        assert!("full".parse::<StopwordSet>().is_err());
        assert_eq!(
            serde_json::to_string(&StopwordSet::Extended).unwrap(),
            "\"extended\""
        );
    }

    #[test]
    fn test_tokenizer_kind_parse() {
        assert_eq!("regex".parse::<TokenizerKind>().unwrap(), TokenizerKind::Delimiter);
        assert_eq!(
            "unicode-words".parse::<TokenizerKind>().unwrap(),
            TokenizerKind::UnicodeWords
        );
        assert!("spacy".parse::<TokenizerKind>().is_err());
    }
}
