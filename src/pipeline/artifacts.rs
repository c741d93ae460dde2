//! First-class pipeline artifacts.
//!
//! Each type is the typed result flowing out of one stage and into the next:
//! [`TokenStream`] (tokenize) -> [`CandidateSet`] (filter) -> [`RankOutput`]
//! (rank).

use crate::types::ScoredKeyword;

/// A normalized token and its position in the stream.
///
/// `position` counts every token the tokenizer produced, including ones
/// later dropped by the filter, so it reflects order in the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub position: usize,
}

/// Normalized tokens in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Build a stream from raw pieces, normalizing each one (trim +
    /// lowercase). Pieces that are empty after trimming are skipped and do
    /// not consume a position.
    pub fn from_raw<'a, I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokens = pieces
            .into_iter()
            .filter_map(|piece| {
                let piece = piece.trim();
                (!piece.is_empty()).then(|| piece.to_lowercase())
            })
            .enumerate()
            .map(|(position, text)| Token { text, position })
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

/// Tokens that survived filtering, still in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    tokens: Vec<Token>,
}

impl CandidateSet {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

/// Ranked keywords plus the number of distinct candidates they were drawn from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankOutput {
    pub keywords: Vec<ScoredKeyword>,
    pub distinct: usize,
}

impl RankOutput {
    pub fn terms(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.term.clone()).collect()
    }

    pub fn into_terms(self) -> Vec<String> {
        self.keywords.into_iter().map(|k| k.term).collect()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}
