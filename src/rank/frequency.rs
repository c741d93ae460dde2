//! Term frequency table
//!
//! Counts occurrences per term while remembering the order in which terms
//! were first seen, so a stable sort by count breaks ties by first
//! occurrence.

use rustc_hash::FxHashMap;

use crate::pipeline::artifacts::CandidateSet;
use crate::types::ScoredKeyword;

/// Occurrence counts in first-seen order
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    /// Maps term -> index into `entries`
    index: FxHashMap<String, usize>,
    /// One entry per distinct term, in first-seen order
    entries: Vec<ScoredKeyword>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Count every candidate token
    pub fn from_candidates(candidates: &CandidateSet) -> Self {
        let mut table = Self::with_capacity(candidates.len());
        for token in candidates.iter() {
            table.record(&token.text, token.position);
        }
        table
    }

    /// Record one occurrence of `term` seen at `position`
    pub fn record(&mut self, term: &str, position: usize) {
        if let Some(&slot) = self.index.get(term) {
            self.entries[slot].count += 1;
            return;
        }

        self.index.insert(term.to_string(), self.entries.len());
        self.entries.push(ScoredKeyword::new(term, 1, position));
    }

    /// Occurrences of `term` (0 if never seen)
    pub fn count(&self, term: &str) -> usize {
        self.index
            .get(term)
            .map(|&slot| self.entries[slot].count)
            .unwrap_or(0)
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &ScoredKeyword> {
        self.entries.iter()
    }

    /// Consume the table, returning entries by descending count.
    ///
    /// `sort_by` is stable, so equal counts keep first-seen order.
    pub fn into_ranked(self) -> Vec<ScoredKeyword> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}
