// Shared enums: TokenType, SpellResult and engine-wide limits

/// Token types for string tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text.
    None,
    /// Run of ASCII letters.
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Digits, symbols and non-ASCII letters.
    Unknown,
}

/// Spell-checker result for a single word form.
///
/// Ordered from best to worst so that `min()` over several lookups picks
/// the least severe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpellResult {
    /// Word is correctly spelled.
    Ok,
    /// Word is correct if the first letter is capitalized ("paris").
    CapitalizeFirst,
    /// Word exists only with a different capitalization ("nasa").
    CapitalizationError,
    /// Word is misspelled.
    Failed,
}

impl SpellResult {
    /// Whether a case-insensitive check accepts the word.
    pub fn is_known(self) -> bool {
        self != SpellResult::Failed
    }
}

// ---------------------------------------------------------------------------
// Limits and defaults
// ---------------------------------------------------------------------------

/// Maximum number of characters in a word handed to the spell checker.
pub const MAX_WORD_CHARS: usize = 255;

/// Words shorter than this are never spell checked.
pub const MIN_CHECKED_WORD_CHARS: usize = 2;

/// Number of distinct words checked per paragraph by default.
pub const DEFAULT_MAX_CHECKED_WORDS: usize = 100;

/// Number of spelling candidates returned per word by default.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_type_equality() {
        assert_eq!(TokenType::Word, TokenType::Word);
        assert_ne!(TokenType::Word, TokenType::Punctuation);
    }

    #[test]
    fn spell_result_orders_best_first() {
        assert!(SpellResult::Ok < SpellResult::CapitalizeFirst);
        assert!(SpellResult::CapitalizeFirst < SpellResult::CapitalizationError);
        assert!(SpellResult::CapitalizationError < SpellResult::Failed);
    }

    #[test]
    fn known_results() {
        assert!(SpellResult::Ok.is_known());
        assert!(SpellResult::CapitalizeFirst.is_known());
        assert!(SpellResult::CapitalizationError.is_known());
        assert!(!SpellResult::Failed.is_known());
    }

    #[test]
    fn limits() {
        assert_eq!(MAX_WORD_CHARS, 255);
        assert_eq!(MIN_CHECKED_WORD_CHARS, 2);
        assert_eq!(DEFAULT_MAX_CHECKED_WORDS, 100);
        assert_eq!(DEFAULT_MAX_SUGGESTIONS, 5);
    }
}
