// Suggestion: the single output unit of the engine

use serde::{Deserialize, Serialize};

/// Which pass produced a suggestion.
///
/// The serialized labels are the wire values the extension UI switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuggestionKind {
    /// A misspelled word and its best correction.
    #[serde(rename = "Spellcheck")]
    Spellcheck,
    /// The whole text rewritten by the phrase rewriter.
    #[serde(rename = "Replacement")]
    Replacement,
    /// A span that can be removed outright.
    #[serde(rename = "deletion")]
    Deletion,
}

impl SuggestionKind {
    /// The wire label of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::Spellcheck => "Spellcheck",
            SuggestionKind::Replacement => "Replacement",
            SuggestionKind::Deletion => "deletion",
        }
    }
}

impl std::fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A proposed text edit and its estimated token savings.
///
/// `before` is an exact substring of the analyzed text. `tokens_saved` is
/// `count(before) - count(after)` and is negative when the edit costs
/// tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub before: String,
    pub after: String,
    pub tokens_saved: i64,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(
        kind: SuggestionKind,
        before: impl Into<String>,
        after: impl Into<String>,
        tokens_saved: i64,
    ) -> Self {
        Self {
            kind,
            before: before.into(),
            after: after.into(),
            tokens_saved,
        }
    }

    /// Create a deletion suggestion (`after` is empty).
    pub fn deletion(before: impl Into<String>, tokens_saved: i64) -> Self {
        Self::new(SuggestionKind::Deletion, before, String::new(), tokens_saved)
    }

    /// Whether applying the suggestion removes text without replacement.
    pub fn is_deletion(&self) -> bool {
        self.after.is_empty()
    }

    /// The `(before, after)` pair callers dedupe ignore lists by.
    pub fn key(&self) -> (&str, &str) {
        (&self.before, &self.after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_shape() {
        let s = Suggestion::new(SuggestionKind::Spellcheck, "Beleev", "Believe", 1);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "Spellcheck",
                "before": "Beleev",
                "after": "Believe",
                "tokensSaved": 1
            })
        );
    }

    #[test]
    fn deletion_label_is_lowercase() {
        let s = Suggestion::deletion("Please ", 1);
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"type\":\"deletion\""));
        assert!(s.is_deletion());
    }

    #[test]
    fn negative_savings_round_trip() {
        let s = Suggestion::new(SuggestionKind::Replacement, "a", "a b", -2);
        let json = serde_json::to_string(&s).unwrap();
        let back: Suggestion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn structural_equality_and_key() {
        let a = Suggestion::deletion("thanks.", 2);
        let b = Suggestion::deletion("thanks.", 2);
        assert_eq!(a, b);
        assert_eq!(a.key(), ("thanks.", ""));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(SuggestionKind::Spellcheck.to_string(), "Spellcheck");
        assert_eq!(SuggestionKind::Replacement.to_string(), "Replacement");
        assert_eq!(SuggestionKind::Deletion.to_string(), "deletion");
    }
}
