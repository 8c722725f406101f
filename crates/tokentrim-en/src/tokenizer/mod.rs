// Word tokenizer: splits text into ASCII-letter words, punctuation,
// whitespace and everything else.

use tokentrim_core::character::{CharType, get_char_type};
use tokentrim_core::enums::TokenType;
use tokentrim_core::token::Token;

fn token_type_of(char_type: CharType) -> TokenType {
    match char_type {
        CharType::Letter => TokenType::Word,
        CharType::Whitespace => TokenType::Whitespace,
        CharType::Punctuation => TokenType::Punctuation,
        CharType::Digit | CharType::Unknown => TokenType::Unknown,
    }
}

/// Find the next token at the start of `text`.
///
/// Returns the token type and its length in bytes. Letters, whitespace and
/// unknown characters group into runs; each punctuation character is a
/// token of its own.
pub fn next_token(text: &str) -> (TokenType, usize) {
    let mut chars = text.char_indices();
    let Some((_, first)) = chars.next() else {
        return (TokenType::None, 0);
    };
    let first_type = get_char_type(first);
    let token_type = token_type_of(first_type);
    if token_type == TokenType::Punctuation {
        return (token_type, first.len_utf8());
    }
    for (i, c) in chars {
        if token_type_of(get_char_type(c)) != token_type {
            return (token_type, i);
        }
    }
    (token_type, text.len())
}

/// Split `text` into tokens. Concatenating the token texts restores `text`.
pub fn tokens(text: &str) -> Vec<Token> {
    let mut result = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let (token_type, len) = next_token(&text[pos..]);
        if token_type == TokenType::None || len == 0 {
            break;
        }
        result.push(Token::new(token_type, &text[pos..pos + len], pos));
        pos += len;
    }
    result
}

/// Iterate over the maximal runs of ASCII letters in `text`.
pub fn words(text: &str) -> impl Iterator<Item = Token> + '_ {
    tokens(text)
        .into_iter()
        .filter(|t| t.token_type == TokenType::Word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn empty_text() {
        assert_eq!(next_token(""), (TokenType::None, 0));
        assert!(tokens("").is_empty());
    }

    #[test]
    fn splits_words_and_punctuation() {
        let toks = tokens("Fix this, thanks.");
        assert_eq!(texts(&toks), vec!["Fix", " ", "this", ",", " ", "thanks", "."]);
        assert_eq!(toks[2].token_type, TokenType::Word);
        assert_eq!(toks[3].token_type, TokenType::Punctuation);
        assert_eq!(toks[2].pos, 4);
    }

    #[test]
    fn punctuation_is_one_char_per_token() {
        let toks = tokens("wait...");
        assert_eq!(texts(&toks), vec!["wait", ".", ".", "."]);
    }

    #[test]
    fn apostrophes_and_digits_split_words() {
        let w: Vec<String> = words("don't buy 3d2 items").map(|t| t.text).collect();
        assert_eq!(w, vec!["don", "t", "buy", "d", "items"]);
    }

    #[test]
    fn non_ascii_letters_split_words() {
        let w: Vec<String> = words("na\u{00EF}ve caf\u{00E9}").map(|t| t.text).collect();
        assert_eq!(w, vec!["na", "ve", "caf"]);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let text = "\u{00E9}\u{00E9} hello";
        let hello = words(text).last().unwrap();
        assert_eq!(hello.text, "hello");
        assert_eq!(&text[hello.span()], "hello");
    }

    #[test]
    fn tokens_reassemble_text() {
        let text = "Please,  help me\twith 42 things!\n";
        let joined: String = tokens(text).into_iter().map(|t| t.text).collect();
        assert_eq!(joined, text);
    }
}
