// src/lib.rs

pub mod c_api;
pub mod core;
pub mod loader;
pub mod persistence;
pub mod pipeline;
pub mod stop_words;

pub use crate::core::stemmer::{StemCache, Stemmer};
pub use crate::loader::{DictionaryDataError, LoadError, RuleDataError};
