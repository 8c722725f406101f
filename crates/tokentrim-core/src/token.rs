// Text tokens produced by the word tokenizer

use crate::enums::TokenType;

/// A text token.
///
/// `pos` is a byte offset into the source text so callers can slice the
/// original string directly; `token_len` counts characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,
    /// The text content of this token.
    pub text: String,
    /// Length of the token in characters.
    pub token_len: usize,
    /// Byte offset of the token within the source text.
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Byte range of this token in the source text.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.pos..self.pos + self.text.len()
    }
}
