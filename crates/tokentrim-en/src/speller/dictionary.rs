// Bridges the expanded Hunspell dictionary to the Speller interface

use tokentrim_core::enums::SpellResult;
use tokentrim_dict::Dictionary;

use crate::speller::Speller;

/// Adapts a loaded `Dictionary` to the `Speller` trait.
///
/// The suggestion-side variant additionally rejects forms marked
/// `NOSUGGEST`, so they are accepted when typed but never proposed.
pub struct DictionarySpeller<'a> {
    dict: &'a Dictionary,
    for_suggestions: bool,
}

impl<'a> DictionarySpeller<'a> {
    /// Speller used to decide correctness.
    pub fn new(dict: &'a Dictionary) -> Self {
        Self {
            dict,
            for_suggestions: false,
        }
    }

    /// Speller used to validate suggestion candidates.
    pub fn for_suggestions(dict: &'a Dictionary) -> Self {
        Self {
            dict,
            for_suggestions: true,
        }
    }
}

impl Speller for DictionarySpeller<'_> {
    fn spell(&self, word: &[char], word_len: usize) -> SpellResult {
        let word: String = word[..word_len].iter().collect();
        if self.for_suggestions {
            let variants = self.dict.variants(&word);
            if !variants.is_empty() && variants.iter().all(|v| v.no_suggest || v.forbidden) {
                return SpellResult::Failed;
            }
        }
        self.dict.lookup(&word)
    }

    fn canonical_form(&self, word: &[char]) -> Option<String> {
        let word: String = word.iter().collect();
        self.dict
            .variants(&word)
            .iter()
            .find(|v| !v.forbidden && !(self.for_suggestions && v.no_suggest))
            .map(|v| v.form.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFF: &str = "NOSUGGEST !\nSFX S Y 1\nSFX S 0 s .\n";
    const DIC: &str = "4\nhelp/S\nParis\nNASA\ndamn/!\n";

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn dict() -> Dictionary {
        Dictionary::parse(AFF, DIC).unwrap()
    }

    #[test]
    fn known_lowercase_word_is_ok() {
        let d = dict();
        let speller = DictionarySpeller::new(&d);
        let word = chars("helps");
        assert_eq!(speller.spell(&word, word.len()), SpellResult::Ok);
    }

    #[test]
    fn unknown_word_returns_failed() {
        let d = dict();
        let speller = DictionarySpeller::new(&d);
        let word = chars("xyzzy");
        assert_eq!(speller.spell(&word, word.len()), SpellResult::Failed);
    }

    #[test]
    fn proper_noun_lowercase_returns_cap_first() {
        let d = dict();
        let speller = DictionarySpeller::new(&d);
        let word = chars("paris");
        assert_eq!(speller.spell(&word, word.len()), SpellResult::CapitalizeFirst);
    }

    #[test]
    fn word_len_limits_the_check() {
        let d = dict();
        let speller = DictionarySpeller::new(&d);
        let word = chars("helpxx");
        assert_eq!(speller.spell(&word, 4), SpellResult::Ok);
    }

    #[test]
    fn no_suggest_words_fail_only_for_suggestions() {
        let d = dict();
        let word = chars("damn");
        assert_eq!(DictionarySpeller::new(&d).spell(&word, 4), SpellResult::Ok);
        assert_eq!(
            DictionarySpeller::for_suggestions(&d).spell(&word, 4),
            SpellResult::Failed
        );
    }

    #[test]
    fn canonical_form_restores_case() {
        let d = dict();
        let speller = DictionarySpeller::new(&d);
        assert_eq!(speller.canonical_form(&chars("nasa")).as_deref(), Some("NASA"));
        assert_eq!(speller.canonical_form(&chars("zzz")), None);
    }
}
