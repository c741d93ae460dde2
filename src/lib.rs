//! rapid-keywords: frequency-based keyword extraction
//!
//! Splits text into tokens, drops stopwords and tokens outside the selected
//! language's alphabet, and ranks the survivors by how often they occur.
//! English (`en`) and Sinhala (`si`) are supported.
//!
//! ```
//! use rapid_keywords::{extract_keywords, Language};
//!
//! let keywords = extract_keywords("the cat sat on the mat the cat ran", Language::English, 3).unwrap();
//! assert_eq!(keywords, vec!["cat", "sat", "mat"]);
//! ```

pub mod api;
pub mod errors;
pub mod extractor;
pub mod nlp;
pub mod pipeline;
pub mod rank;
pub mod types;

#[cfg(feature = "server")]
pub mod server;

pub use errors::{ExtractError, Result};
pub use extractor::{extract_keywords, KeywordExtractor};
pub use pipeline::error_code::ErrorCode;
pub use types::{ExtractorConfig, Language, ScoredKeyword, StopwordSet, TokenizerKind};
