// Phrase rewriter: deterministic verbose-to-concise rewriting

pub mod tables;

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use tables::*;

/// Switches for the optional rewriting stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConciseOptions {
    /// Strip throw-away phrases ("needless to say").
    #[serde(alias = "remove_fillers")]
    pub remove_fillers: bool,
    /// Simplify sentence structure ("there are", "I think that").
    #[serde(alias = "simplify_sentences")]
    pub simplify_sentences: bool,
    /// Also strip hedges and qualifiers.
    pub aggressive: bool,
}

impl Default for ConciseOptions {
    fn default() -> Self {
        Self {
            remove_fillers: true,
            simplify_sentences: true,
            aggressive: false,
        }
    }
}

type Rule = (Regex, &'static str);

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn phrase(text: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", regex::escape(text))).unwrap()
}

fn phrase_rules(table: &'static [(&'static str, &'static str)]) -> Vec<Rule> {
    table.iter().map(|&(from, to)| (phrase(from), to)).collect()
}

static VERBOSE: LazyLock<Vec<Rule>> = LazyLock::new(|| phrase_rules(VERBOSE_PHRASES));
static WORDY: LazyLock<Vec<Rule>> = LazyLock::new(|| phrase_rules(WORDY_PHRASES));
static QUANTITY: LazyLock<Vec<Rule>> = LazyLock::new(|| phrase_rules(QUANTITY_PHRASES));
static FILLERS: LazyLock<Vec<Regex>> =
    LazyLock::new(|| FILLER_PHRASES.iter().map(|p| phrase(p)).collect());

static INTENSIFIED: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    let adjectives = alternation(ABSOLUTE_ADJECTIVES);
    [
        Regex::new(&format!(
            r"(?i)\b(?:{})\s+({adjectives})\b",
            alternation(INTENSIFIERS)
        ))
        .unwrap(),
        Regex::new(&format!(
            r"(?i)\bcompletely\s+({}|{adjectives})\b",
            alternation(COMPLETED_STATES)
        ))
        .unwrap(),
    ]
});

static THAT_THAT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bthat\s+that\b").unwrap());
static VERB_THAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({})\s+that\b", alternation(THAT_VERBS))).unwrap()
});
static THERE_IS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bthere is\s+(?:a|an|the)\s+").unwrap());
static THERE_ARE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bthere are\s+").unwrap());

static HEDGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b(?:{})\s+", alternation(HEDGES))).unwrap());
static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b(?:{})\s+", alternation(QUALIFIERS))).unwrap());
static IS_THE_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bis\s+the\s+case\s+that\b").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());
static SPACE_AFTER_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.,!?;:])\s+").unwrap());

fn apply_rules(text: String, rules: &[Rule]) -> String {
    rules.iter().fold(text, |acc, (re, to)| {
        re.replace_all(&acc, NoExpand(*to)).into_owned()
    })
}

fn remove_redundancy(text: &str) -> String {
    let mut result = apply_rules(text.to_string(), &VERBOSE);
    for re in INTENSIFIED.iter() {
        result = re.replace_all(&result, "$1").into_owned();
    }
    apply_rules(result, &WORDY)
}

fn remove_fillers(text: String) -> String {
    FILLERS.iter().fold(text, |acc, re| re.replace_all(&acc, "").into_owned())
}

fn simplify_sentences(text: String) -> String {
    let result = THAT_THAT.replace_all(&text, "that");
    let result = VERB_THAT.replace_all(&result, "$1");
    let result = THERE_IS.replace_all(&result, "a ");
    let result = THERE_ARE.replace_all(&result, "");
    apply_rules(result.into_owned(), &QUANTITY)
}

fn strip_hedges(text: String) -> String {
    let result = HEDGE.replace_all(&text, "");
    let result = QUALIFIER.replace_all(&result, "");
    IS_THE_CASE.replace_all(&result, "").into_owned()
}

/// Collapse whitespace runs, tighten space around punctuation and trim.
pub fn clean_whitespace(text: &str) -> String {
    let result = WHITESPACE.replace_all(text, " ");
    let result = SPACE_BEFORE_PUNCT.replace_all(&result, "$1");
    let result = SPACE_AFTER_PUNCT.replace_all(&result, "$1 ");
    result.trim().to_string()
}

/// Rewrite `text` with shorter phrasing.
///
/// Deterministic: the same input and options always give the same output.
pub fn make_concise(text: &str, options: &ConciseOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut result = remove_redundancy(text);
    if options.remove_fillers {
        result = remove_fillers(result);
    }
    if options.simplify_sentences {
        result = simplify_sentences(result);
    }
    if options.aggressive {
        result = strip_hedges(result);
    }
    clean_whitespace(&result)
}

/// Size difference between a text and its concise rewrite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionStats {
    pub original_length: usize,
    pub concise_length: usize,
    pub reduction: i64,
    pub reduction_percent: f64,
    pub original_words: usize,
    pub concise_words: usize,
    pub word_reduction: i64,
    pub word_reduction_percent: f64,
}

fn percent(part: i64, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 1000.0).round() / 10.0
}

/// Character and word reductions, percentages rounded to one decimal.
pub fn reduction_stats(original: &str, concise: &str) -> ReductionStats {
    let original_length = original.chars().count();
    let concise_length = concise.chars().count();
    let original_words = original.split_whitespace().count();
    let concise_words = concise.split_whitespace().count();
    let reduction = original_length as i64 - concise_length as i64;
    let word_reduction = original_words as i64 - concise_words as i64;
    ReductionStats {
        original_length,
        concise_length,
        reduction,
        reduction_percent: percent(reduction, original_length),
        original_words,
        concise_words,
        word_reduction,
        word_reduction_percent: percent(word_reduction, original_words),
    }
}
