pub mod affix;
pub mod dictionary;
pub mod rules;
pub mod stemmer;
pub mod types;
