//! Ranking
//!
//! Frequency counting and ordering of candidate terms.

pub mod frequency;

pub use frequency::FrequencyTable;
