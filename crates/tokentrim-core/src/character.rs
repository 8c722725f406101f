// Character classification and simple case mapping

/// Character type classification used by the word tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Only ASCII letters count as letters: spelling candidates are runs of
/// `[A-Za-z]`, so accented letters split a word and are classified as
/// unknown.
pub fn get_char_type(c: char) -> CharType {
    if c.is_ascii_alphabetic() {
        return CharType::Letter;
    }
    if c.is_ascii_digit() {
        return CharType::Digit;
    }
    if is_whitespace(c) {
        return CharType::Whitespace;
    }
    if is_punctuation_char(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

fn is_punctuation_char(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '\u{2018}' // LEFT SINGLE QUOTATION MARK
                | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
                | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
                | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
                | '\u{2010}' // HYPHEN
                | '\u{2013}' // EN DASH
                | '\u{2014}' // EM DASH
                | '\u{2026}' // HORIZONTAL ELLIPSIS
        )
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// Rust's case mapping may expand to several characters ('ß' -> "SS"); the
// simple variants keep a one-to-one mapping by taking the first character.
// ---------------------------------------------------------------------------

/// Convert a character to its simple lowercase equivalent.
pub fn simple_lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != simple_lower(c)
}

/// Check whether a character is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c != simple_upper(c)
}

/// Check whether a character is whitespace.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{180E}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
    }

    #[test]
    fn accented_letters_are_not_word_chars() {
        assert_eq!(get_char_type('\u{00E9}'), CharType::Unknown); // é
    }

    #[test]
    fn char_type_digits() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
    }

    #[test]
    fn char_type_whitespace() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\t'), CharType::Whitespace);
        assert_eq!(get_char_type('\u{00A0}'), CharType::Whitespace);
    }

    #[test]
    fn char_type_punctuation() {
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('\''), CharType::Punctuation);
        assert_eq!(get_char_type('@'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{2019}'), CharType::Punctuation);
    }

    #[test]
    fn char_type_unknown() {
        assert_eq!(get_char_type('\u{4E2D}'), CharType::Unknown);
    }

    #[test]
    fn simple_case_mapping() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_upper('\u{00DF}'), 'S'); // ß keeps a single char
        assert!(is_upper('Q'));
        assert!(is_lower('q'));
        assert!(!is_upper('1'));
        assert!(!is_lower('1'));
    }
}
