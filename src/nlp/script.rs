//! Per-language valid-character patterns.
//!
//! A token qualifies only if every character belongs to the language's
//! alphabet. Numerals and mixed-script tokens are always rejected.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Language;

static ENGLISH_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").expect("valid pattern"));

// Sinhala block U+0D80..U+0DFF. The zero-width joiner may appear inside a
// word (yansaya, rakaransaya) but never first.
static SINHALA_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\x{0D80}-\x{0DFF}][\x{0D80}-\x{0DFF}\x{200D}]*$").expect("valid pattern"));

/// Valid-character pattern for `language`.
pub fn word_pattern(language: Language) -> &'static Regex {
    match language {
        Language::English => &ENGLISH_WORD,
        Language::Sinhala => &SINHALA_WORD,
    }
}

/// Whether a normalized token is written entirely in `language`'s alphabet.
pub fn matches_script(token: &str, language: Language) -> bool {
    word_pattern(language).is_match(token)
}
