// Deletion finder: politeness, gratitude and adverb spans that can be removed

pub mod adverb;

use std::sync::LazyLock;

use hashbrown::HashSet;
use regex::Regex;
use serde::{Deserialize, Serialize};

use tokentrim_core::Suggestion;

pub use adverb::{AdverbTagger, LexiconAdverbTagger};

use crate::cost::TokenCounter;

/// Which deletion checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeletionOptions {
    #[serde(alias = "remove_please")]
    pub remove_please: bool,
    #[serde(alias = "remove_thanks")]
    pub remove_thanks: bool,
    #[serde(alias = "remove_adverbs")]
    pub remove_adverbs: bool,
}

impl Default for DeletionOptions {
    fn default() -> Self {
        Self {
            remove_please: true,
            remove_thanks: true,
            remove_adverbs: true,
        }
    }
}

static LEADING_PLEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(please[, ]+)").unwrap());
static TRAILING_PLEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([, ]*\bplease[.!?]?\s*)$").unwrap());
static TRAILING_THANKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([, ]*\b(?:thank you|thanks)[.!?]?\s*)$").unwrap());

fn captured<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
}

/// "please" at the start and at the end of the text.
pub fn please_spans(text: &str) -> Vec<&str> {
    [&*LEADING_PLEASE, &*TRAILING_PLEASE]
        .into_iter()
        .filter_map(|re| captured(re, text))
        .collect()
}

/// "thanks" or "thank you" at the end of the text.
pub fn thanks_span(text: &str) -> Option<&str> {
    captured(&TRAILING_THANKS, text)
}

/// Find spans of `text` that can be deleted outright.
///
/// Each check reports spans in text order; the saving of a deletion is the
/// token count of the removed span. Adverb deletions need a tagger and are
/// skipped without one.
pub fn find_deletions(
    text: &str,
    options: &DeletionOptions,
    tagger: Option<&dyn AdverbTagger>,
    counter: &TokenCounter,
) -> Vec<Suggestion> {
    if text.is_empty() {
        return Vec::new();
    }
    let deletion = |before: &str| Suggestion::deletion(before, counter.count(before) as i64);
    let mut suggestions = Vec::new();

    if options.remove_please {
        let mut seen = HashSet::new();
        for span in please_spans(text) {
            if seen.insert(span) {
                suggestions.push(deletion(span));
            }
        }
    }
    if options.remove_thanks {
        suggestions.extend(thanks_span(text).map(deletion));
    }
    if options.remove_adverbs {
        if let Some(tagger) = tagger {
            let mut seen = HashSet::new();
            for range in tagger.adverb_spans(text) {
                let Some(span) = text.get(range) else {
                    continue;
                };
                if !span.trim().is_empty() && seen.insert(span) {
                    suggestions.push(deletion(span));
                }
            }
        }
    }
    suggestions
}
