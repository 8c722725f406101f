// Paragraph spell-correction pass: one Spellcheck suggestion per misspelled word

use futures::future::join_all;
use hashbrown::HashSet;

use tokentrim_core::case::match_leading_case;
use tokentrim_core::enums::MIN_CHECKED_WORD_CHARS;
use tokentrim_core::{Suggestion, SuggestionKind};

use crate::corrector::{SpellCorrector, SpellError, WordCheck};
use crate::cost::TokenCounter;
use crate::tokenizer;

/// Distinct words of `text` worth checking, in first-occurrence order,
/// capped at `max_words`.
pub fn candidate_words(text: &str, max_words: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    tokenizer::words(text)
        .map(|token| token.text)
        .filter(|word| word.len() >= MIN_CHECKED_WORD_CHARS)
        .filter(|word| seen.insert(word.clone()))
        .take(max_words)
        .collect()
}

/// Pick the candidate that saves the most tokens once the word's leading
/// capital is carried over. Ties go to the earlier (better ranked)
/// candidate.
pub fn best_candidate(
    counter: &TokenCounter,
    word: &str,
    candidates: &[String],
) -> Option<(String, i64)> {
    let mut best: Option<(String, i64)> = None;
    for candidate in candidates {
        let cased = match_leading_case(word, candidate);
        let saved = counter.savings(word, &cased);
        if best.as_ref().is_none_or(|(_, top)| saved > *top) {
            best = Some((cased, saved));
        }
    }
    best
}

/// Spell check every distinct word of a paragraph.
///
/// Lookups run concurrently and settle independently: a word whose check
/// fails is logged and skipped. Only a dictionary that cannot be loaded
/// fails the whole pass.
pub async fn analyze_paragraph(
    corrector: &SpellCorrector,
    counter: &TokenCounter,
    text: &str,
    max_words: usize,
) -> Result<Vec<Suggestion>, SpellError> {
    corrector.initialize().await?;

    let words = candidate_words(text, max_words);
    let checks = join_all(words.iter().map(|word| corrector.check_word(word))).await;

    let mut suggestions = Vec::new();
    for (word, check) in words.iter().zip(checks) {
        let candidates = match check {
            Ok(WordCheck { correct: true, .. }) => continue,
            Ok(WordCheck { suggestions, .. }) => suggestions,
            Err(err) => {
                tracing::warn!(word = %word, error = %err, "skipping word");
                continue;
            }
        };
        let Some((after, tokens_saved)) = best_candidate(counter, word, &candidates) else {
            tracing::debug!(word = %word, "misspelled, no candidates");
            continue;
        };
        suggestions.push(Suggestion::new(
            SuggestionKind::Spellcheck,
            word.clone(),
            after,
            tokens_saved,
        ));
    }
    Ok(suggestions)
}
