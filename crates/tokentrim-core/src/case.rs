// Case type detection and conversion

use crate::character::{is_lower, is_upper, simple_lower, simple_upper};

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "paris".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Paris".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "iPhone".
    Complex,
    /// All letters are uppercase: "NASA".
    AllUpper,
}

/// Detect the case pattern of a character slice.
///
/// Non-letter characters (digits, apostrophes) are ignored when
/// determining the pattern.
pub fn detect_case(word: &[char]) -> CaseType {
    let Some((&first, rest)) = word.split_first() else {
        return CaseType::NoLetters;
    };

    let mut first_uc = false;
    let mut rest_lc = true;
    let mut all_uc = true;
    let mut no_letters = true;

    if is_upper(first) {
        first_uc = true;
        no_letters = false;
    }
    if is_lower(first) {
        all_uc = false;
        no_letters = false;
    }

    for &c in rest {
        if is_upper(c) {
            no_letters = false;
            rest_lc = false;
        }
        if is_lower(c) {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Apply a case transformation to a mutable character slice.
///
/// `NoLetters` and `Complex` leave the word untouched.
pub fn set_case(word: &mut [char], case_type: CaseType) {
    let Some((first, rest)) = word.split_first_mut() else {
        return;
    };
    match case_type {
        CaseType::NoLetters | CaseType::Complex => {}
        CaseType::AllLower => {
            *first = simple_lower(*first);
            for c in rest.iter_mut() {
                *c = simple_lower(*c);
            }
        }
        CaseType::AllUpper => {
            *first = simple_upper(*first);
            for c in rest.iter_mut() {
                *c = simple_upper(*c);
            }
        }
        CaseType::FirstUpper => {
            *first = simple_upper(*first);
            for c in rest.iter_mut() {
                *c = simple_lower(*c);
            }
        }
    }
}

/// Uppercase the first character of `word`, leaving the rest as is.
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(simple_upper(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Carry the leading capital of `original` over to `candidate`.
///
/// Only the first character is ever changed; a lowercase original keeps
/// the candidate exactly as the dictionary produced it.
pub fn match_leading_case(original: &str, candidate: &str) -> String {
    match original.chars().next() {
        Some(c) if is_upper(c) => capitalize_first(candidate),
        _ => candidate.to_string(),
    }
}
