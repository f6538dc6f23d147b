// src/core/affix.rs
use crate::core::dictionary::DictionaryIndex;
use crate::core::rules::RuleTable;
use crate::core::types::StemCandidate;

/// The candidate-generation and validation engine.
///
/// Borrows the immutable rule table and dictionary; holds no state of its
/// own, so one engine value (or many) can serve any number of threads.
pub struct AffixEngine<'a> {
    rules: &'a RuleTable,
    dict: &'a DictionaryIndex,
}

impl<'a> AffixEngine<'a> {
    pub fn new(rules: &'a RuleTable, dict: &'a DictionaryIndex) -> Self {
        Self { rules, dict }
    }

    /// Returns the first validated stem for `word`, or `None` when nothing
    /// validates. "None" is the normal out-of-vocabulary outcome, not an
    /// error.
    ///
    /// Candidate order is fully deterministic: a direct dictionary hit wins
    /// immediately; otherwise rules are tried in declaration order, and for
    /// each rule its direct candidate is validated before any two-level
    /// combination it seeds.
    pub fn find_stem(&self, word: &str) -> Option<String> {
        let mut found = None;
        self.walk(word, &mut |cand| {
            found = Some(cand.text);
            true
        });
        found
    }

    /// Collects every candidate that validates, in generation order.
    /// Diagnostic surface; `find_stem` is the hot path.
    pub fn analyze(&self, word: &str) -> Vec<StemCandidate> {
        let mut out = Vec::new();
        self.walk(word, &mut |cand| {
            out.push(cand);
            false
        });
        out
    }

    /// Drives the bounded candidate search, handing each validated candidate
    /// to `visit`; stops early when `visit` returns true.
    ///
    /// Cost is O(R) for the first level and O(R²) worst case with
    /// combination, where R is the rule count; depth is capped at two rule
    /// applications so pathological rule sets cannot recurse unboundedly.
    fn walk(&self, word: &str, visit: &mut dyn FnMut(StemCandidate) -> bool) {
        // A word that is itself a base form is its own stem; nothing else is
        // considered (first-result-wins policy).
        if self.dict.contains(word) {
            visit(StemCandidate { text: word.to_string(), flags: Vec::new() });
            return;
        }

        for rule in self.rules.iter() {
            let candidate = match rule.derive(word) {
                Some(c) => c,
                None => continue,
            };

            if self.dict.licenses(&candidate, &[rule.flag])
                && visit(StemCandidate { text: candidate.clone(), flags: vec![rule.flag] })
            {
                return;
            }

            if !rule.combinable {
                continue;
            }

            // Second level: one more rule of a different flag, applied to the
            // once-stemmed candidate. The dictionary entry must license both.
            for second in self.rules.iter() {
                if second.flag == rule.flag || !second.combinable {
                    continue;
                }
                let reduced = match second.derive(&candidate) {
                    Some(c) => c,
                    None => continue,
                };
                if self.dict.licenses(&reduced, &[rule.flag, second.flag])
                    && visit(StemCandidate { text: reduced, flags: vec![rule.flag, second.flag] })
                {
                    return;
                }
            }
        }
    }
}
