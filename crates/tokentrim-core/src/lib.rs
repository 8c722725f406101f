//! Shared types for the tokentrim prompt-shortening engine.
//!
//! - [`enums`] -- token types, speller results and engine-wide limits
//! - [`character`] -- character classification and simple case mapping
//! - [`case`] -- word case detection and case transfer
//! - [`token`] -- text tokens produced by the word tokenizer
//! - [`suggestion`] -- the `Suggestion` value returned to callers

pub mod case;
pub mod character;
pub mod enums;
pub mod suggestion;
pub mod token;

pub use suggestion::{Suggestion, SuggestionKind};
