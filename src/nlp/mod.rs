//! Natural Language Processing components
//!
//! This module provides tokenization, script checks and stopword filtering.

pub mod script;
pub mod stopwords;
pub mod tokenizer;
