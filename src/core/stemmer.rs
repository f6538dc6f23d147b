use crate::core::affix::AffixEngine;
use crate::core::dictionary::DictionaryIndex;
use crate::core::rules::RuleTable;
use crate::core::types::StemCandidate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// The public stemmer is an explicit, immutable context: rule table and
// dictionary are built once (by the loader or from a compiled blob) and never
// mutated afterwards, so `&Stemmer` is freely shared across indexing workers
// with no locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stemmer {
    rules: RuleTable,
    dict: DictionaryIndex,
}

impl Stemmer {
    pub fn new(rules: RuleTable, dict: DictionaryIndex) -> Self {
        Self { rules, dict }
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn dictionary(&self) -> &DictionaryIndex {
        &self.dict
    }

    /// Stems one word, never failing: when nothing validates the input comes
    /// back unchanged. A search pipeline must not lose a token just because
    /// it could not be stemmed.
    pub fn stem(&self, word: &str) -> String {
        match self.try_stem(word) {
            Some(stem) => {
                tracing::debug!(word, stem = stem.as_str(), "stemmed");
                stem
            }
            None => {
                tracing::debug!(word, "not stemmed");
                word.to_string()
            }
        }
    }

    /// The internally-distinguishable outcome: `Some(stem)` for a validated
    /// match, `None` for the normal "no stem found" non-match.
    ///
    /// The engine itself is case-sensitive; when the exact form yields
    /// nothing and the word carries uppercase, a lowercased copy is tried
    /// once, so "Dělati" stems like "dělati".
    pub fn try_stem(&self, word: &str) -> Option<String> {
        let engine = AffixEngine::new(&self.rules, &self.dict);
        if let Some(stem) = engine.find_stem(word) {
            return Some(stem);
        }
        if word.chars().any(|c| c.is_uppercase()) {
            return engine.find_stem(&word.to_lowercase());
        }
        None
    }

    /// Every validated candidate for `word`, in generation order.
    /// Diagnostic surface only; results never feed back into `stem`.
    pub fn analyze(&self, word: &str) -> Vec<StemCandidate> {
        AffixEngine::new(&self.rules, &self.dict).analyze(word)
    }
}

/// A private per-worker memo of (word -> stem) results.
///
/// High-frequency words repeat constantly during indexing, and candidate
/// generation cost scales with the rule count; one of these per worker thread
/// avoids both the recomputation and any cross-thread synchronization.
#[derive(Debug, Default)]
pub struct StemCache {
    memo: HashMap<String, String>,
}

impl StemCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `stemmer.stem(word)`, memoized. O(1) on a hit.
    pub fn stem(&mut self, stemmer: &Stemmer, word: &str) -> String {
        if let Some(hit) = self.memo.get(word) {
            return hit.clone();
        }
        let stem = stemmer.stem(word);
        self.memo.insert(word.to_string(), stem.clone());
        stem
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AffixKind, AffixRule, CondItem, Condition};

    fn sample() -> Stemmer {
        let rules = RuleTable::new(vec![AffixRule {
            flag: 'A',
            kind: AffixKind::Suffix,
            combinable: false,
            strip: "ti".to_string(),
            add: String::new(),
            condition: Condition {
                items: vec![CondItem::Literal('t'), CondItem::Literal('i')],
            },
        }]);
        let mut dict = DictionaryIndex::new();
        dict.insert("dělat", &['A']);
        Stemmer::new(rules, dict)
    }

    #[test]
    fn stem_reduces_inflected_form() {
        assert_eq!(sample().stem("dělati"), "dělat");
    }

    #[test]
    fn identity_fallback_for_unknown_words() {
        let stemmer = sample();
        assert_eq!(stemmer.stem("xyzzy"), "xyzzy");
        assert_eq!(stemmer.try_stem("xyzzy"), None);
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.stem("..."), "...");
    }

    #[test]
    fn dictionary_entry_stems_to_itself() {
        let stemmer = sample();
        assert_eq!(stemmer.stem("dělat"), "dělat");
        // ...and as a validated match, not via the fallback.
        assert_eq!(stemmer.try_stem("dělat"), Some("dělat".to_string()));
    }

    #[test]
    fn stemming_is_idempotent_on_base_forms() {
        let stemmer = sample();
        let once = stemmer.stem("dělati");
        assert_eq!(stemmer.stem(&once), once);
    }

    #[test]
    fn cased_input_falls_back_to_lowercase_match() {
        let stemmer = sample();
        assert_eq!(stemmer.stem("Dělati"), "dělat");
        assert_eq!(stemmer.stem("DĚLATI"), "dělat");
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let stemmer = sample();
        let first = stemmer.stem("dělati");
        for _ in 0..10 {
            assert_eq!(stemmer.stem("dělati"), first);
        }
    }

    #[test]
    fn cache_returns_the_same_results() {
        let stemmer = sample();
        let mut cache = StemCache::new();
        assert_eq!(cache.stem(&stemmer, "dělati"), "dělat");
        assert_eq!(cache.stem(&stemmer, "dělati"), "dělat");
        assert_eq!(cache.stem(&stemmer, "xyzzy"), "xyzzy");
        assert_eq!(cache.len(), 2);
    }
}
