// Individual suggestion generators: each applies one class of edit operation
// to produce candidate words, then validates them via the speller.

use tokentrim_core::case::{CaseType, set_case};
use tokentrim_core::character::{simple_lower, simple_upper};
use tokentrim_core::enums::SpellResult;

use super::status::SuggestionStatus;
use crate::speller::Speller;

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual suggestion generators.
///
/// Each generator produces candidate words by applying one class of edit
/// operation to the misspelled word, then validates each candidate through
/// the speller.
pub trait SuggestionGenerator: Send + Sync {
    /// Generate suggestions for the word tracked by `status`, using `speller`
    /// to validate candidates.
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>);
}

// ---------------------------------------------------------------------------
// Shared helper
// ---------------------------------------------------------------------------

/// Check a candidate buffer against the speller and, if it passes, add it
/// to the status with its dictionary casing restored.
pub fn suggest_for_buffer(
    speller: &dyn Speller,
    status: &mut SuggestionStatus<'_>,
    buffer: &[char],
    buf_len: usize,
) {
    if status.should_abort() {
        return;
    }
    let word = &buffer[..buf_len];
    let result = speller.spell(word, buf_len);
    status.charge();
    match result {
        SpellResult::Failed => {}
        SpellResult::Ok => {
            status.add_suggestion(word.iter().collect(), priority_from_result(result));
        }
        SpellResult::CapitalizeFirst => {
            let mut corrected = word.to_vec();
            set_case(&mut corrected, CaseType::FirstUpper);
            status.add_suggestion(corrected.iter().collect(), priority_from_result(result));
        }
        SpellResult::CapitalizationError => {
            let fixed = speller
                .canonical_form(word)
                .unwrap_or_else(|| word.iter().collect());
            status.add_suggestion(fixed, priority_from_result(result));
        }
    }
}

/// Map a `SpellResult` to a base priority value. Lower is better.
fn priority_from_result(result: SpellResult) -> i32 {
    match result {
        SpellResult::Ok => 1,
        SpellResult::CapitalizeFirst => 2,
        SpellResult::CapitalizationError => 3,
        SpellResult::Failed => i32::MAX,
    }
}

/// Check a multi-word candidate ("a lot") part by part.
///
/// Returns `true` when every part is known.
fn spell_parts(speller: &dyn Speller, status: &mut SuggestionStatus<'_>, text: &str) -> bool {
    for part in text.split(' ').filter(|p| !p.is_empty()) {
        let chars: Vec<char> = part.chars().collect();
        let result = speller.spell(&chars, chars.len());
        status.charge();
        if !matches!(result, SpellResult::Ok | SpellResult::CapitalizeFirst) {
            return false;
        }
    }
    true
}

// =========================================================================
// Individual generators
// =========================================================================

// ---------------------------------------------------------------------------
// CaseChange
// ---------------------------------------------------------------------------

/// Try the word as-is to see if it only needs a case correction.
///
/// A primary generator: one lookup, catches "nasa" -> "NASA".
pub struct CaseChange;

impl SuggestionGenerator for CaseChange {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        suggest_for_buffer(speller, status, word, word.len());
    }
}

// ---------------------------------------------------------------------------
// RepTable
// ---------------------------------------------------------------------------

/// Apply the dictionary's `REP` table of common misspellings.
///
/// Each `(from, to)` pair is substituted at every position where `from`
/// occurs. A replacement containing a space yields a two-word candidate
/// that is accepted only if both words are known.
pub struct RepTable {
    pub pairs: Vec<(String, String)>,
}

impl SuggestionGenerator for RepTable {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word: String = status.word().iter().collect();
        for (from, to) in &self.pairs {
            if from.is_empty() {
                continue;
            }
            for (pos, _) in word.match_indices(from.as_str()) {
                if status.should_abort() {
                    return;
                }
                let candidate = format!("{}{}{}", &word[..pos], to, &word[pos + from.len()..]);
                if candidate.contains(' ') {
                    // A table hit ranks as one known word however many parts it has.
                    if spell_parts(speller, status, &candidate) {
                        status.add_suggestion(
                            candidate.trim().to_string(),
                            priority_from_result(SpellResult::Ok),
                        );
                    }
                } else {
                    let buffer: Vec<char> = candidate.chars().collect();
                    suggest_for_buffer(speller, status, &buffer, buffer.len());
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// KeyNeighbour
// ---------------------------------------------------------------------------

/// Replace each character with its neighbours on the same keyboard row.
pub struct KeyNeighbour {
    /// Keyboard rows from the `KEY` directive.
    pub rows: Vec<Vec<char>>,
}

impl SuggestionGenerator for KeyNeighbour {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        let mut buffer = word.to_vec();

        for pos in 0..wlen {
            let original = word[pos];
            let lower = simple_lower(original);
            for row in &self.rows {
                let Some(idx) = row.iter().position(|&c| c == lower) else {
                    continue;
                };
                let neighbours = [idx.checked_sub(1), Some(idx + 1)];
                for n in neighbours.into_iter().flatten() {
                    let Some(&replacement) = row.get(n) else {
                        continue;
                    };
                    if status.should_abort() {
                        return;
                    }
                    buffer[pos] = replacement;
                    suggest_for_buffer(speller, status, &buffer, wlen);
                }
                buffer[pos] = original;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Try deleting one character at each position.
///
/// Skips positions where the deleted character equals its predecessor,
/// since that produces the same candidate as the previous position.
pub struct Deletion;

impl SuggestionGenerator for Deletion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        if wlen < 2 {
            return;
        }
        let new_len = wlen - 1;
        let mut buffer = Vec::with_capacity(new_len);

        for i in 0..wlen {
            if status.should_abort() {
                break;
            }
            if i > 0 && simple_lower(word[i]) == simple_lower(word[i - 1]) {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.extend_from_slice(&word[i + 1..]);
            suggest_for_buffer(speller, status, &buffer, new_len);
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Try inserting each character from a set at every position in the word.
///
/// The set is the dictionary's `TRY` string, ordered by letter frequency,
/// so common insertions are tested first.
pub struct Insertion {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Insertion {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        if wlen == 0 {
            return;
        }
        let new_len = wlen + 1;
        let mut buffer = Vec::with_capacity(new_len);

        for &ins in &self.characters {
            for j in 0..=wlen {
                if status.should_abort() {
                    return;
                }
                // Inserting next to an identical letter duplicates a
                // candidate produced at the neighbouring position.
                if j > 0 && simple_lower(word[j - 1]) == ins {
                    continue;
                }
                buffer.clear();
                buffer.extend_from_slice(&word[..j]);
                buffer.push(ins);
                buffer.extend_from_slice(&word[j..]);
                suggest_for_buffer(speller, status, &buffer, new_len);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Replacement
// ---------------------------------------------------------------------------

/// Try replacing each character with every character of a set.
pub struct Replacement {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for Replacement {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        let mut buffer = word.to_vec();

        for pos in 0..wlen {
            let original = word[pos];
            for &to in &self.characters {
                if to == simple_lower(original) {
                    continue;
                }
                if status.should_abort() {
                    return;
                }
                buffer[pos] = to;
                suggest_for_buffer(speller, status, &buffer, wlen);
            }
            buffer[pos] = original;
        }
    }
}

// ---------------------------------------------------------------------------
// Swap
// ---------------------------------------------------------------------------

/// Try swapping pairs of characters within a distance limit.
///
/// Short words try every pair; longer words limit the distance to
/// `50 / word_len`.
pub struct Swap;

impl SuggestionGenerator for Swap {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        if wlen < 2 {
            return;
        }
        let max_distance = if wlen <= 8 { 10 } else { 50 / wlen };
        if max_distance == 0 {
            return;
        }
        let mut buffer = word.to_vec();

        // Adjacent transpositions are by far the most common, try them first.
        for distance in 1..=max_distance.min(wlen - 1) {
            for i in 0..wlen - distance {
                if status.should_abort() {
                    return;
                }
                let j = i + distance;
                if simple_lower(word[i]) == simple_lower(word[j]) {
                    continue;
                }
                buffer[i] = word[j];
                buffer[j] = word[i];
                suggest_for_buffer(speller, status, &buffer, wlen);
                buffer[i] = word[i];
                buffer[j] = word[j];
            }
        }
    }
}

// ---------------------------------------------------------------------------
// SplitWord
// ---------------------------------------------------------------------------

/// Try splitting the word into two known words separated by a space.
pub struct SplitWord;

impl SuggestionGenerator for SplitWord {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        let wlen = word.len();
        if wlen < 4 {
            return;
        }

        for splitind in (2..=wlen - 2).rev() {
            if status.should_abort() {
                break;
            }
            let (part1, part2) = word.split_at(splitind);
            let result1 = speller.spell(part1, part1.len());
            status.charge();
            if !matches!(result1, SpellResult::Ok | SpellResult::CapitalizeFirst) {
                continue;
            }
            let result2 = speller.spell(part2, part2.len());
            status.charge();
            if !matches!(result2, SpellResult::Ok | SpellResult::CapitalizeFirst) {
                continue;
            }

            let mut suggestion: Vec<char> = Vec::with_capacity(wlen + 1);
            suggestion.extend_from_slice(part1);
            if result1 == SpellResult::CapitalizeFirst {
                suggestion[0] = simple_upper(suggestion[0]);
            }
            suggestion.push(' ');
            let second_start = suggestion.len();
            suggestion.extend_from_slice(part2);
            if result2 == SpellResult::CapitalizeFirst {
                suggestion[second_start] = simple_upper(suggestion[second_start]);
            }
            let priority = priority_from_result(result1) + priority_from_result(result2);
            status.add_suggestion(suggestion.iter().collect(), priority);
        }
    }
}

// ---------------------------------------------------------------------------
// TwoEdits
// ---------------------------------------------------------------------------

/// Visit every single-edit variant of `word`: deletions, adjacent swaps,
/// replacements and insertions using `characters`.
///
/// The visitor returns `false` to stop the walk.
fn for_each_edit(word: &[char], characters: &[char], visit: &mut dyn FnMut(&[char]) -> bool) {
    let wlen = word.len();
    let mut buffer: Vec<char> = Vec::with_capacity(wlen + 1);

    for i in 0..wlen {
        buffer.clear();
        buffer.extend_from_slice(&word[..i]);
        buffer.extend_from_slice(&word[i + 1..]);
        if !buffer.is_empty() && !visit(&buffer) {
            return;
        }
    }
    for i in 0..wlen.saturating_sub(1) {
        if word[i] == word[i + 1] {
            continue;
        }
        buffer.clear();
        buffer.extend_from_slice(word);
        buffer.swap(i, i + 1);
        if !visit(&buffer) {
            return;
        }
    }
    for i in 0..wlen {
        for &c in characters {
            if c == word[i] {
                continue;
            }
            buffer.clear();
            buffer.extend_from_slice(word);
            buffer[i] = c;
            if !visit(&buffer) {
                return;
            }
        }
    }
    for i in 0..=wlen {
        for &c in characters {
            buffer.clear();
            buffer.extend_from_slice(&word[..i]);
            buffer.push(c);
            buffer.extend_from_slice(&word[i..]);
            if !visit(&buffer) {
                return;
            }
        }
    }
}

/// Try every combination of two single edits.
///
/// Only used as a secondary generator: it is expensive and runs only when
/// no single edit produced a known word.
pub struct TwoEdits {
    pub characters: Vec<char>,
}

impl SuggestionGenerator for TwoEdits {
    fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        let word = status.word();
        for_each_edit(word, &self.characters, &mut |first| {
            for_each_edit(first, &self.characters, &mut |second| {
                suggest_for_buffer(speller, status, second, second.len());
                !status.should_abort()
            });
            !status.should_abort()
        });
    }
}
