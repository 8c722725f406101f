// Spell checking module

pub mod dictionary;

pub use dictionary::DictionarySpeller;

use tokentrim_core::enums::SpellResult;

/// Trait for spell checkers.
///
/// Implementations take a word as a `char` slice (for random-access
/// indexing by the suggestion generators) and return a `SpellResult`.
pub trait Speller {
    /// Check whether the given word is correct (or would be correct
    /// with different capitalization).
    ///
    /// - `word`: the word to check
    /// - `word_len`: the number of characters to consider
    fn spell(&self, word: &[char], word_len: usize) -> SpellResult;

    /// The dictionary spelling of a word that only differs in case
    /// ("nasa" -> "NASA"). `None` when the speller cannot tell.
    fn canonical_form(&self, _word: &[char]) -> Option<String> {
        None
    }
}
