//! Hunspell dictionary loader.
//!
//! Parses the subset of the Hunspell affix (`.aff`) and word list (`.dic`)
//! formats that English dictionaries use and expands every stem through its
//! affix rules into a flat, case-aware form store.
//!
//! # Architecture
//!
//! - [`flags`] -- Flag encodings (`FLAG short|long|num|UTF-8`)
//! - [`condition`] -- Affix conditions (`[^aeiou]y`, `.`)
//! - [`affix`] -- Affix file directives and PFX/SFX rule classes
//! - [`dic`] -- Word list entries
//! - [`store`] -- Affix expansion and case-aware lookup

pub mod affix;
pub mod condition;
pub mod dic;
pub mod flags;
pub mod store;

pub use store::{Dictionary, WordEntry};

/// Error type for dictionary parsing and loading.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("unsupported character set: {0}")]
    UnsupportedEncoding(String),
    #[error("{file} is not valid UTF-8")]
    InvalidUtf8 { file: &'static str },
    #[error("unknown FLAG type: {0}")]
    InvalidFlagType(String),
    #[error("line {line}: invalid flag {flag:?}")]
    InvalidFlag { line: usize, flag: String },
    #[error("line {line}: malformed {directive} directive")]
    MalformedDirective { line: usize, directive: String },
    #[error("invalid affix condition {0:?}")]
    InvalidCondition(String),
    #[error("word list contains no entries")]
    EmptyWordList,
}
