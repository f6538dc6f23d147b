// src/core/dictionary.rs
use crate::core::types::FlagId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Exact-match index of known base forms and their morphological flags.
///
/// Lookups are case-sensitive by design; callers fold case before asking.
/// Backed by a hash map, so `contains`/`flags_for` stay O(1) expected for
/// dictionaries of tens of thousands of entries. Immutable after load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DictionaryIndex {
    entries: HashMap<String, Box<[FlagId]>>,
}

impl DictionaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: HashMap::with_capacity(capacity) }
    }

    /// Registers a base form. A repeated base form merges its flag sets,
    /// keeping first-seen order (hunspell dictionaries may list a word once
    /// per homonym).
    pub fn insert(&mut self, base: &str, flags: &[FlagId]) {
        match self.entries.get_mut(base) {
            Some(existing) => {
                let mut merged: Vec<FlagId> = existing.to_vec();
                for &f in flags {
                    if !merged.contains(&f) {
                        merged.push(f);
                    }
                }
                *existing = merged.into_boxed_slice();
            }
            None => {
                self.entries.insert(base.to_string(), flags.to_vec().into_boxed_slice());
            }
        }
    }

    /// Exact-match membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// The flag set of a base form; empty for absent words.
    pub fn flags_for(&self, word: &str) -> &[FlagId] {
        self.entries.get(word).map(|f| f.as_ref()).unwrap_or(&[])
    }

    /// Whether `word` is a known base form licensed for every flag in `flags`.
    pub fn licenses(&self, word: &str, flags: &[FlagId]) -> bool {
        match self.entries.get(word) {
            Some(entry) => flags.iter().all(|f| entry.contains(f)),
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
