// src/core/rules.rs
use crate::core::types::{AffixRule, FlagId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The loaded, immutable affix rule table.
///
/// Rules are stored in declaration order, which is the order the engine
/// generates candidates in; a per-flag index gives O(1) access to the
/// (still declaration-ordered) rules of one morphological class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<AffixRule>,
    by_flag: HashMap<FlagId, Vec<usize>>,
}

impl RuleTable {
    pub fn new(rules: Vec<AffixRule>) -> Self {
        let mut by_flag: HashMap<FlagId, Vec<usize>> = HashMap::new();
        for (idx, rule) in rules.iter().enumerate() {
            by_flag.entry(rule.flag).or_default().push(idx);
        }
        Self { rules, by_flag }
    }

    /// All rules, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &AffixRule> {
        self.rules.iter()
    }

    /// The rules of one flag, in declaration order. Empty for unknown flags.
    pub fn lookup(&self, flag: FlagId) -> impl Iterator<Item = &AffixRule> {
        self.by_flag
            .get(&flag)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&idx| &self.rules[idx])
    }

    /// Whether any rule carries this flag.
    pub fn has_flag(&self, flag: FlagId) -> bool {
        self.by_flag.contains_key(&flag)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
