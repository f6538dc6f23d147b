// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A single-character morphological class identifier.
/// Dictionary entries carry a set of these; each affix rule belongs to one.
pub type FlagId = char;

/// Which end of the word a rule operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffixKind {
    Prefix,
    Suffix,
}

/// One element of a rule condition pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CondItem {
    /// `.`: any single character.
    Any,
    /// A literal character.
    Literal(char),
    /// `[...]` or `[^...]`: a character class, optionally negated.
    Class { chars: Vec<char>, negated: bool },
}

impl CondItem {
    pub fn matches(&self, c: char) -> bool {
        match self {
            CondItem::Any => true,
            CondItem::Literal(l) => *l == c,
            CondItem::Class { chars, negated } => chars.contains(&c) != *negated,
        }
    }
}

/// A parsed condition pattern. For suffix rules the items are checked against
/// the last N characters of the surface word, for prefix rules against the
/// first N. An empty condition is always satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Condition {
    pub items: Vec<CondItem>,
}

impl Condition {
    /// True when the relevant end of `word` matches every item.
    /// A word shorter than the pattern never matches.
    pub fn matches(&self, word: &str, kind: AffixKind) -> bool {
        match kind {
            AffixKind::Suffix => {
                let mut chars = word.chars().rev();
                for item in self.items.iter().rev() {
                    match chars.next() {
                        Some(c) if item.matches(c) => {}
                        _ => return false,
                    }
                }
                true
            }
            AffixKind::Prefix => {
                let mut chars = word.chars();
                for item in &self.items {
                    match chars.next() {
                        Some(c) if item.matches(c) => {}
                        _ => return false,
                    }
                }
                true
            }
        }
    }
}

/// A single affix-stripping rule in stemming direction: remove `strip` from
/// the surface word, put `add` back in its place, and the result is a
/// candidate base form for the rule's flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixRule {
    pub flag: FlagId,
    pub kind: AffixKind,
    /// Whether this rule may combine with a differently-flagged rule on the
    /// same word (two-level stripping).
    pub combinable: bool,
    pub strip: String,
    pub add: String,
    pub condition: Condition,
}

impl AffixRule {
    /// Derives the candidate stem this rule produces for `word`, or `None`
    /// when the rule is not applicable (wrong ending/beginning, or the
    /// condition fails on the surface form).
    pub fn derive(&self, word: &str) -> Option<String> {
        if !self.condition.matches(word, self.kind) {
            return None;
        }
        match self.kind {
            AffixKind::Suffix => {
                if !word.ends_with(&self.strip) {
                    return None;
                }
                let kept = &word[..word.len() - self.strip.len()];
                Some(format!("{}{}", kept, self.add))
            }
            AffixKind::Prefix => {
                if !word.starts_with(&self.strip) {
                    return None;
                }
                let kept = &word[self.strip.len()..];
                Some(format!("{}{}", self.add, kept))
            }
        }
    }
}

/// A validated candidate stem, produced during one stemming call and
/// discarded afterwards. `flags` lists the rule flags that were applied to
/// reach it (one entry, or two for a combined derivation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemCandidate {
    pub text: String,
    pub flags: Vec<FlagId>,
}
