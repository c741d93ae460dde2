//! Stage trait definitions for the pipeline.
//!
//! Each trait is one processing stage boundary. Implementations are
//! statically dispatched through [`Pipeline`](super::runner::Pipeline); the
//! traits are object-safe so `Box<dyn ...>` also works.

use crate::nlp::script::matches_script;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::{CandidateSet, RankOutput, TokenStream};
use crate::rank::frequency::FrequencyTable;
use crate::types::{ExtractorConfig, Language};

// ============================================================================
// Tokenizer — raw text to normalized tokens (stage 1)
// ============================================================================

/// Splits raw text into a normalized [`TokenStream`].
///
/// # Contract
///
/// - Tokens come out lowercased and trimmed, in input order.
/// - Empty pieces are never emitted.
/// - No language knowledge: script and stopword checks belong to
///   [`TokenFilter`].
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> TokenStream;
}

// ============================================================================
// TokenFilter — keep only qualifying tokens (stage 2)
// ============================================================================

/// Selects the tokens eligible for ranking.
pub trait TokenFilter {
    fn select(&self, tokens: &TokenStream, language: Language, cfg: &ExtractorConfig)
        -> CandidateSet;
}

/// Length, script and stopword filter.
///
/// A token survives when it has at least `cfg.min_token_len` characters,
/// matches the language's valid-character pattern, and is not a stopword of
/// that language.
#[derive(Debug, Clone)]
pub struct LanguageTokenFilter {
    english: StopwordFilter,
    sinhala: StopwordFilter,
}

impl Default for LanguageTokenFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageTokenFilter {
    /// Filter using the default stopword tables.
    pub fn new() -> Self {
        Self {
            english: StopwordFilter::new(Language::English),
            sinhala: StopwordFilter::new(Language::Sinhala),
        }
    }

    /// Filter using the extended stopword tables.
    pub fn extended() -> Self {
        Self {
            english: StopwordFilter::extended(Language::English),
            sinhala: StopwordFilter::extended(Language::Sinhala),
        }
    }

    /// Add stopwords to every language's table.
    pub fn with_extra_stopwords<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.english.add_stopwords(words);
        self.sinhala.add_stopwords(words);
        self
    }

    pub fn stopwords(&self, language: Language) -> &StopwordFilter {
        match language {
            Language::English => &self.english,
            Language::Sinhala => &self.sinhala,
        }
    }

    /// Whether a single normalized token qualifies.
    pub fn accepts(&self, token: &str, language: Language, cfg: &ExtractorConfig) -> bool {
        token.chars().count() >= cfg.min_token_len
            && matches_script(token, language)
            && !self.stopwords(language).is_stopword(token)
    }
}

impl TokenFilter for LanguageTokenFilter {
    fn select(
        &self,
        tokens: &TokenStream,
        language: Language,
        cfg: &ExtractorConfig,
    ) -> CandidateSet {
        CandidateSet::new(
            tokens
                .iter()
                .filter(|t| self.accepts(&t.text, language, cfg))
                .cloned()
                .collect(),
        )
    }
}

// ============================================================================
// Ranker — order candidates and cut to the limit (stage 3)
// ============================================================================

/// Orders candidates and returns at most `limit` keywords.
pub trait Ranker {
    fn rank(&self, candidates: &CandidateSet, limit: usize, cfg: &ExtractorConfig) -> RankOutput;
}

/// Ranks by descending term frequency, ties broken by first occurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRanker;

impl Ranker for FrequencyRanker {
    fn rank(&self, candidates: &CandidateSet, limit: usize, _cfg: &ExtractorConfig) -> RankOutput {
        let table = FrequencyTable::from_candidates(candidates);
        let distinct = table.len();
        let mut keywords = table.into_ranked();
        keywords.truncate(limit);
        RankOutput { keywords, distinct }
    }
}
