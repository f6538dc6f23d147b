// File: src/loader.rs
//! Parsers for the raw affix and dictionary text formats.
//!
//! Both formats follow hunspell's shape, with rules written in stemming
//! direction (strip from the surface form, add back toward the base form):
//!
//! ```text
//! # affix data                        # dictionary data
//! SET UTF-8                           3
//! SFX A Y 2                           dělat/A
//! SFX A ti 0 ti                       hrad/AB
//! SFX A ám 0 ám                       slovo
//! ```
//!
//! A rule line is `kind flag strip add condition`, with `0` standing for an
//! empty strip/add. Conditions are checked against the surface word's ending
//! (SFX) or beginning (PFX) and may use `.` and `[...]`/`[^...]` classes.
//! The header's Y/N marks the flag's rules as combinable. Directive lines the
//! engine does not interpret (`SET`, `TRY`, ...) are skipped, as hunspell
//! affix files carry many of them.
//!
//! These parsers run once at startup; reading the data from disk (or
//! embedding it) stays the caller's concern.

use crate::core::dictionary::DictionaryIndex;
use crate::core::rules::RuleTable;
use crate::core::stemmer::Stemmer;
use crate::core::types::{AffixKind, AffixRule, CondItem, Condition, FlagId};
use thiserror::Error;

/// Malformed affix rule data. Raised only during one-time loading.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RuleDataError {
    #[error("line {line}: rule is missing fields (expected kind, flag, strip, add, condition)")]
    MissingFields { line: usize },

    #[error("line {line}: unknown strip type {found:?} (expected SFX or PFX)")]
    UnknownStripType { line: usize, found: String },

    #[error("line {line}: flag must be a single character, got {found:?}")]
    BadFlag { line: usize, found: String },

    #[error("line {line}: combinable marker must be Y or N, got {found:?}")]
    BadCombinable { line: usize, found: String },

    #[error("line {line}: rule count {found:?} is not a number")]
    BadRuleCount { line: usize, found: String },

    #[error("line {line}: rule flag '{found}' does not match header flag '{expected}'")]
    FlagMismatch { line: usize, expected: FlagId, found: FlagId },

    #[error("line {line}: rule kind does not match its header")]
    KindMismatch { line: usize },

    #[error("line {line}: unterminated [ character class in condition")]
    UnterminatedClass { line: usize },

    #[error("header at line {line} declares {declared} rules but {found} followed")]
    RuleCountMismatch { line: usize, declared: usize, found: usize },
}

/// Malformed dictionary data. Raised only during one-time loading.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DictionaryDataError {
    #[error("line {line}: entry has an empty base form")]
    EmptyBaseForm { line: usize },
}

struct OpenHeader {
    kind: AffixKind,
    flag: FlagId,
    combinable: bool,
    declared: usize,
    seen: usize,
    line: usize,
}

/// Parses affix rule data into a [`RuleTable`], preserving declaration order.
pub fn parse_affix_data(raw: &str) -> Result<RuleTable, RuleDataError> {
    let mut rules: Vec<AffixRule> = Vec::new();
    let mut header: Option<OpenHeader> = None;

    for (idx, raw_line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let kind = match fields[0] {
            "SFX" => AffixKind::Suffix,
            "PFX" => AffixKind::Prefix,
            // Inside a rule block every line must carry the block's strip
            // type; anywhere else an unrecognized first field is a directive
            // (SET, TRY, ...) this engine does not interpret.
            other => {
                if header.as_ref().is_some_and(|h| h.seen < h.declared) {
                    return Err(RuleDataError::UnknownStripType {
                        line: line_no,
                        found: other.to_string(),
                    });
                }
                continue;
            }
        };

        if fields.len() < 4 {
            return Err(RuleDataError::MissingFields { line: line_no });
        }
        let flag = parse_flag(fields[1], line_no)?;

        if let Some(h) = header.as_mut().filter(|h| h.seen < h.declared) {
            // Rule line: kind flag strip add condition.
            if fields.len() < 5 {
                return Err(RuleDataError::MissingFields { line: line_no });
            }
            if kind != h.kind {
                return Err(RuleDataError::KindMismatch { line: line_no });
            }
            if flag != h.flag {
                return Err(RuleDataError::FlagMismatch {
                    line: line_no,
                    expected: h.flag,
                    found: flag,
                });
            }
            rules.push(AffixRule {
                flag,
                kind,
                combinable: h.combinable,
                strip: parse_affix_text(fields[2]),
                add: parse_affix_text(fields[3]),
                condition: parse_condition(fields[4], line_no)?,
            });
            h.seen += 1;
        } else {
            // Header line: kind flag Y/N count.
            let combinable = match fields[2] {
                "Y" => true,
                "N" => false,
                other => {
                    return Err(RuleDataError::BadCombinable {
                        line: line_no,
                        found: other.to_string(),
                    })
                }
            };
            let declared: usize = fields[3].parse().map_err(|_| RuleDataError::BadRuleCount {
                line: line_no,
                found: fields[3].to_string(),
            })?;
            header = Some(OpenHeader { kind, flag, combinable, declared, seen: 0, line: line_no });
        }
    }

    if let Some(h) = header {
        if h.seen < h.declared {
            return Err(RuleDataError::RuleCountMismatch {
                line: h.line,
                declared: h.declared,
                found: h.seen,
            });
        }
    }

    Ok(RuleTable::new(rules))
}

/// Parses dictionary data into a [`DictionaryIndex`].
///
/// A leading integer line is taken as an entry-count capacity hint (a
/// mismatch is tolerated, as hunspell tolerates it). Flags referencing no
/// rule are kept but inert rather than rejected.
pub fn parse_dictionary_data(raw: &str) -> Result<DictionaryIndex, DictionaryDataError> {
    let mut lines = raw.lines().enumerate().peekable();

    let capacity = match lines.peek() {
        Some((_, first)) => match first.trim().parse::<usize>() {
            Ok(n) => {
                lines.next();
                n
            }
            Err(_) => 0,
        },
        None => 0,
    };

    let mut dict = DictionaryIndex::with_capacity(capacity);
    for (idx, raw_line) in lines {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Hunspell entries may carry tab-separated morph fields; only the
        // first field matters here.
        let entry = line.split_whitespace().next().unwrap_or("");
        let (base, flags) = match entry.split_once('/') {
            Some((base, flags)) => (base, flags.chars().collect::<Vec<FlagId>>()),
            None => (entry, Vec::new()),
        };
        if base.is_empty() {
            return Err(DictionaryDataError::EmptyBaseForm { line: line_no });
        }
        dict.insert(base, &flags);
    }
    Ok(dict)
}

impl Stemmer {
    /// Builds a ready-to-use stemmer from raw affix and dictionary text.
    pub fn from_raw(affix_data: &str, dictionary_data: &str) -> Result<Self, LoadError> {
        let rules = parse_affix_data(affix_data)?;
        let dict = parse_dictionary_data(dictionary_data)?;
        Ok(Stemmer::new(rules, dict))
    }
}

/// Either side of the one-time load failing.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("malformed rule data: {0}")]
    MalformedRuleData(#[from] RuleDataError),

    #[error("malformed dictionary data: {0}")]
    MalformedDictionaryData(#[from] DictionaryDataError),
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_flag(field: &str, line: usize) -> Result<FlagId, RuleDataError> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(RuleDataError::BadFlag { line, found: field.to_string() }),
    }
}

/// `0` denotes an empty strip/add, as in hunspell.
fn parse_affix_text(field: &str) -> String {
    if field == "0" {
        String::new()
    } else {
        field.to_string()
    }
}

fn parse_condition(field: &str, line: usize) -> Result<Condition, RuleDataError> {
    if field == "0" || field == "." {
        return Ok(Condition::default());
    }
    let mut items = Vec::new();
    let mut chars = field.chars();
    while let Some(c) = chars.next() {
        match c {
            '.' => items.push(CondItem::Any),
            '[' => {
                let mut class = Vec::new();
                let mut negated = false;
                let mut closed = false;
                let mut first = true;
                for cc in chars.by_ref() {
                    match cc {
                        '^' if first => negated = true,
                        ']' => {
                            closed = true;
                            break;
                        }
                        other => class.push(other),
                    }
                    first = false;
                }
                if !closed {
                    return Err(RuleDataError::UnterminatedClass { line });
                }
                items.push(CondItem::Class { chars: class, negated });
            }
            other => items.push(CondItem::Literal(other)),
        }
    }
    Ok(Condition { items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AffixKind;

    const AFF: &str = "\
# Czech sample affix data
SET UTF-8

SFX A Y 2
SFX A ti 0 ti
SFX A \u{e1}m 0 \u{e1}m

PFX B N 1
PFX B nej 0 nej
";

    const DIC: &str = "\
3
d\u{11b}lat/A
hrad/AB
slovo
";

    #[test]
    fn parses_rules_in_declaration_order() {
        let table = parse_affix_data(AFF).unwrap();
        assert_eq!(table.len(), 3);
        let rules: Vec<_> = table.iter().collect();
        assert_eq!(rules[0].strip, "ti");
        assert_eq!(rules[0].kind, AffixKind::Suffix);
        assert!(rules[0].combinable);
        assert_eq!(rules[2].kind, AffixKind::Prefix);
        assert_eq!(rules[2].strip, "nej");
        assert!(!rules[2].combinable);
    }

    #[test]
    fn parses_dictionary_entries_and_flags() {
        let dict = parse_dictionary_data(DIC).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.flags_for("hrad"), &['A', 'B']);
        assert!(dict.flags_for("slovo").is_empty());
    }

    #[test]
    fn from_raw_builds_a_working_stemmer() {
        let stemmer = Stemmer::from_raw(AFF, DIC).unwrap();
        assert_eq!(stemmer.stem("d\u{11b}lati"), "d\u{11b}lat");
        assert_eq!(stemmer.stem("xyzzy"), "xyzzy");
    }

    #[test]
    fn condition_classes_parse_and_match() {
        let aff = "\
SFX N Y 1
SFX N y 0 [^aeiou]y
";
        let table = parse_affix_data(aff).unwrap();
        let rule = table.iter().next().unwrap();
        assert_eq!(rule.derive("hrady"), Some("hrad".to_string()));
        assert_eq!(rule.derive("aay"), None);
    }

    #[test]
    fn unknown_strip_type_inside_block_fails() {
        let aff = "\
SFX A Y 2
SFX A ti 0 ti
FOO A t 0 t
";
        let err = parse_affix_data(aff).unwrap_err();
        assert!(matches!(err, RuleDataError::UnknownStripType { line: 3, .. }));
    }

    #[test]
    fn directives_outside_blocks_are_skipped() {
        let aff = "\
SET UTF-8
TRY aeiou
SFX A Y 1
SFX A ti 0 ti
WORDCHARS 0123456789
";
        assert_eq!(parse_affix_data(aff).unwrap().len(), 1);
    }

    #[test]
    fn missing_fields_fail() {
        let err = parse_affix_data("SFX A Y 1\nSFX A ti\n").unwrap_err();
        assert!(matches!(err, RuleDataError::MissingFields { line: 2 }));
    }

    #[test]
    fn header_flag_mismatch_fails() {
        let err = parse_affix_data("SFX A Y 1\nSFX B ti 0 ti\n").unwrap_err();
        assert!(matches!(err, RuleDataError::FlagMismatch { expected: 'A', found: 'B', .. }));
    }

    #[test]
    fn truncated_rule_block_fails() {
        let err = parse_affix_data("SFX A Y 3\nSFX A ti 0 ti\n").unwrap_err();
        assert!(matches!(err, RuleDataError::RuleCountMismatch { declared: 3, found: 1, .. }));
    }

    #[test]
    fn bad_combinable_marker_fails() {
        let err = parse_affix_data("SFX A X 1\nSFX A ti 0 ti\n").unwrap_err();
        assert!(matches!(err, RuleDataError::BadCombinable { line: 1, .. }));
    }

    #[test]
    fn unterminated_class_fails() {
        let err = parse_affix_data("SFX A Y 1\nSFX A y 0 [aeiou\n").unwrap_err();
        assert!(matches!(err, RuleDataError::UnterminatedClass { line: 2 }));
    }

    #[test]
    fn empty_dictionary_base_form_fails() {
        let err = parse_dictionary_data("2\n/A\n").unwrap_err();
        assert_eq!(err, DictionaryDataError::EmptyBaseForm { line: 2 });
    }

    #[test]
    fn count_header_mismatch_is_tolerated() {
        let dict = parse_dictionary_data("99\nslovo\n").unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn unknown_dictionary_flags_are_inert_not_fatal() {
        let stemmer = Stemmer::from_raw("SFX A Y 1\nSFX A ti 0 ti\n", "1\nd\u{11b}lat/AZ\n").unwrap();
        assert_eq!(stemmer.stem("d\u{11b}lati"), "d\u{11b}lat");
        assert!(!stemmer.rules().has_flag('Z'));
    }
}
