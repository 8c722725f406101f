// Adverb tagging for the deletion finder

use std::ops::Range;
use std::sync::LazyLock;

use hashbrown::HashSet;

use crate::tokenizer;

/// Finds adverb spans in a text.
///
/// Spans are byte ranges into the text, in order and non-overlapping.
pub trait AdverbTagger: Send + Sync {
    fn adverb_spans(&self, text: &str) -> Vec<Range<usize>>;
}

/// Common adverbs that do not end in "-ly".
const ADVERBS: &[&str] = &[
    "very", "really", "quite", "just", "actually", "basically", "literally", "simply",
    "totally", "rather", "somewhat", "pretty", "fairly", "truly", "almost", "already",
    "still", "even", "maybe", "perhaps", "indeed", "anyway", "anyways", "somehow",
    "often", "sometimes", "always", "usually", "again", "soon", "too", "much",
];

/// Words ending in "-ly" that are not adverbs, plus adverbs whose removal
/// changes the meaning of the sentence.
const NOT_ADVERBS: &[&str] = &[
    "only", "family", "early", "reply", "supply", "apply", "imply", "comply", "multiply",
    "rely", "ally", "fly", "july", "italy", "holy", "ugly", "silly", "belly", "jelly",
    "bully", "curly", "hilly", "oily", "costly", "deadly", "elderly", "friendly", "lively",
    "lonely", "lovely", "likely", "unlikely", "orderly", "timely", "daily", "weekly",
    "monthly", "yearly", "hourly", "assembly", "anomaly", "butterfly", "firefly",
    "monopoly", "lily", "emily", "kelly", "sally", "holly", "wholly", "bodily", "chilly",
    "scholarly", "ghastly", "smelly", "woolly", "sly", "shy", "dry", "rally",
    "tally", "gully", "folly", "dolly", "homily", "melancholy", "poly", "jolly",
];

static ADVERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ADVERBS.iter().copied().collect());
static NOT_ADVERB_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NOT_ADVERBS.iter().copied().collect());

/// Tags adverbs from a fixed lexicon plus "-ly" words.
///
/// Runs of adjacent adverbs ("very quickly") are merged into one span.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconAdverbTagger;

impl LexiconAdverbTagger {
    pub fn new() -> Self {
        Self
    }

    /// Whether a single word is tagged as an adverb.
    pub fn is_adverb(word: &str) -> bool {
        let lower = word.to_ascii_lowercase();
        if ADVERB_SET.contains(lower.as_str()) {
            return true;
        }
        lower.len() > 4 && lower.ends_with("ly") && !NOT_ADVERB_SET.contains(lower.as_str())
    }
}

impl AdverbTagger for LexiconAdverbTagger {
    fn adverb_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans: Vec<Range<usize>> = Vec::new();
        for word in tokenizer::words(text) {
            if !Self::is_adverb(&word.text) {
                continue;
            }
            let span = word.span();
            if let Some(last) = spans.last_mut() {
                if text[last.end..span.start].chars().all(char::is_whitespace) {
                    last.end = span.end;
                    continue;
                }
            }
            spans.push(span);
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged<'a>(text: &'a str) -> Vec<&'a str> {
        LexiconAdverbTagger
            .adverb_spans(text)
            .into_iter()
            .map(|r| &text[r])
            .collect()
    }

    #[test]
    fn lexicon_and_ly_words() {
        assert!(LexiconAdverbTagger::is_adverb("Really"));
        assert!(LexiconAdverbTagger::is_adverb("quickly"));
        assert!(!LexiconAdverbTagger::is_adverb("family"));
        assert!(!LexiconAdverbTagger::is_adverb("only"));
        assert!(!LexiconAdverbTagger::is_adverb("help"));
    }

    #[test]
    fn adjacent_adverbs_merge() {
        assert_eq!(
            tagged("Please very quickly fix this, honestly."),
            vec!["very quickly", "honestly"]
        );
    }

    #[test]
    fn punctuation_breaks_runs() {
        assert_eq!(tagged("really, truly done"), vec!["really", "truly"]);
    }

    #[test]
    fn no_adverbs() {
        assert!(tagged("Fix the family reply").is_empty());
        assert!(tagged("").is_empty());
    }
}
