// Affix expansion and case-aware word-form lookup

use hashbrown::HashMap;

use tokentrim_core::case::{CaseType, detect_case};
use tokentrim_core::enums::SpellResult;

use crate::DictError;
use crate::affix::{AffixClass, AffixFile, AffixKind, Encoding};
use crate::dic::{DicEntry, parse_dic};
use crate::flags::{Flag, has_flag};

/// One surface form in the store, with the casing the word list gives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub form: String,
    /// Correct, but never offered as a suggestion.
    pub no_suggest: bool,
    /// Always rejected.
    pub forbidden: bool,
    /// Capitalized variants of a lowercase form are not accepted.
    pub keep_case: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct FormFlags {
    no_suggest: bool,
    forbidden: bool,
    keep_case: bool,
}

/// An immutable, fully expanded dictionary.
///
/// Forms are keyed by their lowercase spelling; each key keeps every casing
/// variant the word list produced ("us" and "US").
#[derive(Debug, Clone)]
pub struct Dictionary {
    forms: HashMap<String, Vec<WordEntry>>,
    try_chars: Vec<char>,
    keyboard: Vec<Vec<char>>,
    replacements: Vec<(String, String)>,
    stem_count: usize,
}

impl Dictionary {
    /// Build a dictionary from raw affix and word list bytes, honouring the
    /// affix file's `SET` directive.
    pub fn from_bytes(aff: &[u8], dic: &[u8]) -> Result<Self, DictError> {
        let encoding = Encoding::sniff(aff)?;
        let aff_text = encoding.decode(aff, "affix file")?;
        let dic_text = encoding.decode(dic, "word list")?;
        Self::parse(&aff_text, &dic_text)
    }

    /// Build a dictionary from decoded affix and word list text.
    pub fn parse(aff: &str, dic: &str) -> Result<Self, DictError> {
        let affixes = AffixFile::parse(aff)?;
        let entries = parse_dic(dic, affixes.flag_mode)?;

        let mut dict = Dictionary {
            forms: HashMap::with_capacity(entries.len() * 2),
            try_chars: affixes.try_chars.clone(),
            keyboard: affixes.keyboard.clone(),
            replacements: affixes.replacements.clone(),
            stem_count: entries.len(),
        };
        for entry in &entries {
            dict.expand(&affixes, entry);
        }

        tracing::info!(
            stems = dict.stem_count,
            forms = dict.len(),
            "loaded dictionary"
        );
        Ok(dict)
    }

    fn expand(&mut self, affixes: &AffixFile, entry: &DicEntry) {
        let flag_set = |flag: Option<Flag>| flag.is_some_and(|f| has_flag(&entry.flags, f));
        let flags = FormFlags {
            no_suggest: flag_set(affixes.no_suggest),
            forbidden: flag_set(affixes.forbidden),
            keep_case: flag_set(affixes.keep_case),
        };

        if !flag_set(affixes.need_affix) {
            self.insert(&entry.word, flags);
        }

        let mut cross_suffixed = Vec::new();
        for class in affixes.classes_for(AffixKind::Suffix, &entry.flags) {
            for (form, continuation) in apply_class(class, &entry.word) {
                // Twofold suffixes: one more suffix level from the rule's own flags.
                for inner in affixes.classes_for(AffixKind::Suffix, &continuation) {
                    for (twice, _) in apply_class(inner, &form) {
                        self.insert(&twice, flags);
                    }
                }
                if class.cross_product {
                    cross_suffixed.push(form.clone());
                }
                self.insert(&form, flags);
            }
        }

        for class in affixes.classes_for(AffixKind::Prefix, &entry.flags) {
            for (form, _) in apply_class(class, &entry.word) {
                self.insert(&form, flags);
            }
            if class.cross_product {
                for suffixed in &cross_suffixed {
                    for (form, _) in apply_class(class, suffixed) {
                        self.insert(&form, flags);
                    }
                }
            }
        }
    }

    fn insert(&mut self, form: &str, flags: FormFlags) {
        let variants = self.forms.entry(form.to_lowercase()).or_default();
        if let Some(existing) = variants.iter_mut().find(|e| e.form == form) {
            existing.no_suggest &= flags.no_suggest;
            existing.forbidden |= flags.forbidden;
            existing.keep_case |= flags.keep_case;
            return;
        }
        variants.push(WordEntry {
            form: form.to_string(),
            no_suggest: flags.no_suggest,
            forbidden: flags.forbidden,
            keep_case: flags.keep_case,
        });
    }

    /// Check `word` against the stored forms, taking its casing into account.
    ///
    /// A capitalized or all-caps spelling of a lowercase form is accepted
    /// (sentence starts, shouting) unless the form is marked `KEEPCASE`;
    /// a lowercase spelling of a proper noun reports `CapitalizeFirst`.
    pub fn lookup(&self, word: &str) -> SpellResult {
        let Some(variants) = self.forms.get(&word.to_lowercase()) else {
            return SpellResult::Failed;
        };
        let word_chars: Vec<char> = word.chars().collect();
        let word_case = detect_case(&word_chars);

        variants
            .iter()
            .filter(|entry| !entry.forbidden)
            .map(|entry| case_result(entry, word, word_case))
            .min()
            .unwrap_or(SpellResult::Failed)
    }

    /// Case-insensitive correctness check.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(&word.to_lowercase()).is_known()
    }

    /// All stored casing variants of `word` (matched case-insensitively).
    pub fn variants(&self, word: &str) -> &[WordEntry] {
        self.forms
            .get(&word.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Characters to try for insertions and replacements.
    pub fn try_chars(&self) -> &[char] {
        &self.try_chars
    }

    /// Keyboard rows for neighbour replacements.
    pub fn keyboard(&self) -> &[Vec<char>] {
        &self.keyboard
    }

    /// `REP` substitution pairs in file order.
    pub fn replacements(&self) -> &[(String, String)] {
        &self.replacements
    }

    /// Number of distinct lowercase forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Apply every rule of `class` to `stem`, yielding forms and their
/// continuation flags.
fn apply_class<'a>(
    class: &'a AffixClass,
    stem: &'a str,
) -> impl Iterator<Item = (String, Vec<Flag>)> + 'a {
    class.rules.iter().filter_map(move |rule| {
        rule.apply(class.kind, stem)
            .map(|form| (form, rule.continuation.clone()))
    })
}

fn case_result(entry: &WordEntry, word: &str, word_case: CaseType) -> SpellResult {
    if entry.form == word {
        return SpellResult::Ok;
    }
    let form_chars: Vec<char> = entry.form.chars().collect();
    let form_case = detect_case(&form_chars);
    match (form_case, word_case) {
        (CaseType::AllLower, CaseType::FirstUpper | CaseType::AllUpper) if !entry.keep_case => {
            SpellResult::Ok
        }
        (CaseType::FirstUpper, CaseType::AllUpper) if !entry.keep_case => SpellResult::Ok,
        (CaseType::FirstUpper, CaseType::AllLower) => SpellResult::CapitalizeFirst,
        _ => SpellResult::CapitalizationError,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AFF: &str = "\
TRY esianrtolcdugmphbyfvkwz
KEY qwertyuiop|asdfghjkl|zxcvbnm
NOSUGGEST !
FORBIDDENWORD *
KEEPCASE K

PFX U Y 1
PFX U 0 un .

SFX S Y 3
SFX S y ies [^aeiou]y
SFX S 0 s [aeiou]y
SFX S 0 s [^y]

SFX D Y 2
SFX D 0 d e
SFX D 0 ed [^e]

SFX R N 1
SFX R 0 er/S .
";

    const DIC: &str = "\
9
believe/DS
city/S
do/U
lock/UDS
Paris
NASA
damn/!
alot/*
read/R
";

    fn dict() -> Dictionary {
        Dictionary::parse(AFF, DIC).unwrap()
    }

    #[test]
    fn base_and_suffixed_forms() {
        let d = dict();
        assert_eq!(d.lookup("believe"), SpellResult::Ok);
        assert_eq!(d.lookup("believed"), SpellResult::Ok);
        assert_eq!(d.lookup("believes"), SpellResult::Ok);
        assert_eq!(d.lookup("cities"), SpellResult::Ok);
        assert_eq!(d.lookup("citys"), SpellResult::Failed);
    }

    #[test]
    fn prefix_and_cross_product() {
        let d = dict();
        assert_eq!(d.lookup("undo"), SpellResult::Ok);
        assert_eq!(d.lookup("unlocked"), SpellResult::Ok);
        assert_eq!(d.lookup("unlocks"), SpellResult::Ok);
    }

    #[test]
    fn twofold_suffix() {
        let d = dict();
        assert_eq!(d.lookup("reader"), SpellResult::Ok);
        assert_eq!(d.lookup("readers"), SpellResult::Ok);
    }

    #[test]
    fn case_handling() {
        let d = dict();
        assert_eq!(d.lookup("Believe"), SpellResult::Ok);
        assert_eq!(d.lookup("BELIEVE"), SpellResult::Ok);
        assert_eq!(d.lookup("paris"), SpellResult::CapitalizeFirst);
        assert_eq!(d.lookup("PARIS"), SpellResult::Ok);
        assert_eq!(d.lookup("nasa"), SpellResult::CapitalizationError);
        assert!(d.contains("Paris"));
        assert!(d.contains("nasa"));
    }

    #[test]
    fn forbidden_and_no_suggest() {
        let d = dict();
        assert_eq!(d.lookup("alot"), SpellResult::Failed);
        assert_eq!(d.lookup("damn"), SpellResult::Ok);
        assert!(d.variants("damn")[0].no_suggest);
    }

    #[test]
    fn hints_are_exposed() {
        let d = dict();
        assert_eq!(d.try_chars()[0], 'e');
        assert_eq!(d.keyboard().len(), 3);
        assert!(d.replacements().is_empty());
        assert_eq!(d.stem_count, 9);
        assert!(!d.is_empty());
    }

    #[test]
    fn from_bytes_decodes_utf8() {
        let d = Dictionary::from_bytes(AFF.as_bytes(), DIC.as_bytes()).unwrap();
        assert!(d.contains("believe"));
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let err = Dictionary::from_bytes(AFF.as_bytes(), b"1\n\xff\xfe\n").unwrap_err();
        assert!(matches!(err, DictError::InvalidUtf8 { .. }));
    }
}
