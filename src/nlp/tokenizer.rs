//! Tokenizers
//!
//! Two interchangeable strategies behind the [`Tokenizer`] stage trait:
//! a regex delimiter split (default) and Unicode word segmentation.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::pipeline::artifacts::TokenStream;
use crate::pipeline::traits::Tokenizer;
use crate::types::TokenizerKind;

/// Whitespace, ASCII punctuation, typographic quotes/dashes, and the Sinhala
/// kunddaliya (U+0DF4).
static DELIMITERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"[\s.,;:!?'"`()\[\]{}<>/\\|@#$%^&*+=~_\-\x{2013}\x{2014}\x{2018}\x{2019}\x{201C}\x{201D}\x{2026}\x{0DF4}]+"#,
    )
    .expect("delimiter pattern is valid")
});

/// Splits on a fixed delimiter set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimiterTokenizer;

impl Tokenizer for DelimiterTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        TokenStream::from_raw(DELIMITERS.split(text))
    }
}

/// Splits on Unicode word boundaries (UAX #29).
///
/// Keeps Sinhala vowel signs and joiners attached to their base letters and
/// handles punctuation outside the fixed delimiter set.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        TokenStream::from_raw(text.unicode_words())
    }
}

/// Tokenizer chosen at runtime from [`TokenizerKind`].
#[derive(Debug, Clone, Copy)]
pub enum AnyTokenizer {
    Delimiter(DelimiterTokenizer),
    UnicodeWords(UnicodeWordTokenizer),
}

impl AnyTokenizer {
    pub fn from_kind(kind: TokenizerKind) -> Self {
        match kind {
            TokenizerKind::Delimiter => Self::Delimiter(DelimiterTokenizer),
            TokenizerKind::UnicodeWords => Self::UnicodeWords(UnicodeWordTokenizer),
        }
    }

    pub fn kind(&self) -> TokenizerKind {
        match self {
            Self::Delimiter(_) => TokenizerKind::Delimiter,
            Self::UnicodeWords(_) => TokenizerKind::UnicodeWords,
        }
    }
}

impl Default for AnyTokenizer {
    fn default() -> Self {
        Self::from_kind(TokenizerKind::default())
    }
}

impl Tokenizer for AnyTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        match self {
            Self::Delimiter(t) => t.tokenize(text),
            Self::UnicodeWords(t) => t.tokenize(text),
        }
    }
}
