//! Staged extraction pipeline
//!
//! Tokenize, filter and rank stages behind traits, the runner that chains
//! them, and the JSON spec + validation engine used to configure it.

pub mod artifacts;
pub mod error_code;
pub mod errors;
pub mod observer;
pub mod runner;
pub mod spec;
pub mod traits;
pub mod validation;
