// File: src/pipeline.rs
//! Token-pipeline glue: the trimmer, the stop-word stage, the stemmer stage,
//! and an explicitly composed pipeline of named transforms.
//!
//! The pipeline is an ordered sequence assembled by the caller at setup time;
//! there is no runtime registry resolving stages by name. Stage names exist
//! only so index-time and query-time configuration can be compared; the two
//! sides must run the identical stemmer stage or recall breaks.

use crate::core::stemmer::Stemmer;
use crate::stop_words::is_stop_word;
use std::sync::Arc;

/// Stable stage identifiers, shared by index-time and query-time pipelines.
pub const TRIMMER_ID: &str = "trimmer-cs";
pub const STOP_WORD_FILTER_ID: &str = "stopWordFilter-cs";
pub const STEMMER_ID: &str = "stemmer-cs";

/// A single token transform: `Some(token)` passes a (possibly rewritten)
/// token on, `None` drops it.
pub type Transform = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// An ordered sequence of named token transforms.
pub struct Pipeline {
    stages: Vec<(String, Transform)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn add(&mut self, name: &str, transform: Transform) -> &mut Self {
        self.stages.push((name.to_string(), transform));
        self
    }

    /// The stage names, in application order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Runs one token through every stage in order. A stage returning `None`
    /// drops the token and short-circuits the rest.
    pub fn run(&self, token: &str) -> Option<String> {
        let mut current = token.to_string();
        for (_, transform) in &self.stages {
            current = transform(&current)?;
        }
        Some(current)
    }

    /// Convenience: runs every token of a pre-split sequence, keeping the
    /// survivors.
    pub fn run_tokens<'a, I: IntoIterator<Item = &'a str>>(&self, tokens: I) -> Vec<String> {
        tokens.into_iter().filter_map(|t| self.run(t)).collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// The full Czech indexing pipeline: trim, drop stop words, stem.
pub fn czech_index_pipeline(stemmer: Arc<Stemmer>) -> Pipeline {
    let mut pipeline = Pipeline::new();
    pipeline.add(TRIMMER_ID, Box::new(|token| trim_token(token)));
    pipeline.add(
        STOP_WORD_FILTER_ID,
        Box::new(|token| if is_stop_word(token) { None } else { Some(token.to_string()) }),
    );
    pipeline.add(STEMMER_ID, Box::new(move |token| Some(stemmer.stem(token))));
    pipeline
}

/// The query-side pipeline. Queries arrive pre-tokenized, so only the
/// stemmer runs, and it must be the same stemmer stage the index used.
pub fn czech_search_pipeline(stemmer: Arc<Stemmer>) -> Pipeline {
    let mut pipeline = Pipeline::new();
    pipeline.add(STEMMER_ID, Box::new(move |token| Some(stemmer.stem(token))));
    pipeline
}

/// Strips leading and trailing non-word characters from a token; a token
/// with no word characters at all is dropped.
pub fn trim_token(token: &str) -> Option<String> {
    let trimmed = token.trim_matches(|c| !is_word_char(c));
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

// Unicode ranges of characters considered part of a word, covering Latin
// letters with the full diacritic repertoire (Czech letters live in Latin-1
// Supplement and Latin Extended-A) plus Latin phonetic extensions.
const WORD_CHAR_RANGES: &[(u32, u32)] = &[
    (0x41, 0x5A),       // A-Z
    (0x61, 0x7A),       // a-z
    (0xAA, 0xAA),       // ª
    (0xBA, 0xBA),       // º
    (0xC0, 0xD6),       // À-Ö
    (0xD8, 0xF6),       // Ø-ö
    (0xF8, 0x2B8),      // ø plus Latin Extended-A/B and modifier letters
    (0x2E0, 0x2E4),
    (0x1D00, 0x1D25),
    (0x1D2C, 0x1D5C),
    (0x1D62, 0x1D65),
    (0x1D6B, 0x1D77),
    (0x1D79, 0x1DBE),
    (0x1E00, 0x1EFF),   // Latin Extended Additional
    (0x2071, 0x2071),
    (0x207F, 0x207F),
    (0x2090, 0x209C),
    (0x212A, 0x212B),
    (0x2132, 0x2132),
    (0x214E, 0x214E),
    (0x2160, 0x2188),   // Roman numerals
    (0x2C60, 0x2C7F),   // Latin Extended-C
    (0xA722, 0xA787),
    (0xA78B, 0xA7AD),
    (0xA7B0, 0xA7B7),
    (0xA7F7, 0xA7FF),
    (0xAB30, 0xAB5A),
    (0xAB5C, 0xAB64),
    (0xFB00, 0xFB06),   // Latin ligatures
    (0xFF21, 0xFF3A),   // fullwidth A-Z
    (0xFF41, 0xFF5A),   // fullwidth a-z
];

pub fn is_word_char(c: char) -> bool {
    let cp = c as u32;
    WORD_CHAR_RANGES.iter().any(|&(lo, hi)| cp >= lo && cp <= hi)
}
