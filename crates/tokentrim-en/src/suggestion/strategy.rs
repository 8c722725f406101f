// Suggestion strategy orchestration: the English typing strategy

use tokentrim_dict::Dictionary;

use super::generators::*;
use super::status::SuggestionStatus;
use crate::speller::Speller;

/// Default cost budget, in dictionary lookups, for one misspelled word.
///
/// The budget counts double while nothing has been found, which leaves
/// room for two-edit candidates of short words. An unknown word never
/// costs more than about twice this.
pub const DEFAULT_MAX_COST: usize = 2_000;

/// Letters tried when the dictionary has no usable `TRY` line, most
/// frequent first.
const FALLBACK_TRY: &str = "esianrtolcdugmphbyfvkwzxqj";

/// US keyboard rows, used when the dictionary has no `KEY` line.
const FALLBACK_KEYBOARD: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A suggestion strategy holds primary and secondary generator lists
/// and runs them under a cost budget.
pub struct SuggestionStrategy {
    max_cost: usize,
    /// Run first; if any produce suggestions, secondaries are skipped.
    primary_generators: Vec<Box<dyn SuggestionGenerator>>,
    /// Run only if the primaries produced nothing.
    generators: Vec<Box<dyn SuggestionGenerator>>,
}

impl SuggestionStrategy {
    /// Run the primary generators, then the secondary ones if nothing was
    /// found.
    pub fn generate(&self, speller: &dyn Speller, status: &mut SuggestionStatus<'_>) {
        status.set_max_cost(self.max_cost);

        for generator in &self.primary_generators {
            if status.should_abort() {
                break;
            }
            generator.generate(speller, status);
        }
        if status.suggestion_count() > 0 {
            return;
        }

        for generator in &self.generators {
            if status.should_abort() {
                break;
            }
            generator.generate(speller, status);
        }
    }

    pub fn max_cost(&self) -> usize {
        self.max_cost
    }
}

/// Distinct lowercase ASCII letters of the dictionary's `TRY` line, in
/// file order. Other characters cannot appear inside a checked word.
fn try_letters(dict: &Dictionary) -> Vec<char> {
    let mut letters: Vec<char> = Vec::with_capacity(26);
    let source: Vec<char> = if dict.try_chars().is_empty() {
        FALLBACK_TRY.chars().collect()
    } else {
        dict.try_chars().to_vec()
    };
    for c in source.into_iter().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_lowercase() && !letters.contains(&c) {
            letters.push(c);
        }
    }
    letters
}

fn keyboard_rows(dict: &Dictionary) -> Vec<Vec<char>> {
    if dict.keyboard().is_empty() {
        FALLBACK_KEYBOARD
            .iter()
            .map(|row| row.chars().collect())
            .collect()
    } else {
        dict.keyboard().to_vec()
    }
}

/// Build the typing strategy for an English dictionary.
///
/// Primary generators cover every single edit plus the dictionary's `REP`
/// table and word splits; two-edit candidates are only searched when none
/// of them found anything.
pub fn english_strategy(dict: &Dictionary, max_cost: usize) -> SuggestionStrategy {
    let letters = try_letters(dict);

    let primary_generators: Vec<Box<dyn SuggestionGenerator>> = vec![
        Box::new(CaseChange),
        Box::new(RepTable {
            pairs: dict.replacements().to_vec(),
        }),
        Box::new(Swap),
        Box::new(KeyNeighbour {
            rows: keyboard_rows(dict),
        }),
        Box::new(Deletion),
        Box::new(Insertion {
            characters: letters.clone(),
        }),
        Box::new(Replacement {
            characters: letters.clone(),
        }),
        Box::new(SplitWord),
    ];

    let generators: Vec<Box<dyn SuggestionGenerator>> =
        vec![Box::new(TwoEdits { characters: letters })];

    SuggestionStrategy {
        max_cost,
        primary_generators,
        generators,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokentrim_core::enums::SpellResult;

    struct MockSpeller {
        accepted: Vec<String>,
    }

    impl MockSpeller {
        fn new(words: &[&str]) -> Self {
            Self {
                accepted: words.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl Speller for MockSpeller {
        fn spell(&self, word: &[char], word_len: usize) -> SpellResult {
            let s: String = word[..word_len].iter().collect();
            if self.accepted.contains(&s) {
                SpellResult::Ok
            } else {
                SpellResult::Failed
            }
        }
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn empty_dict() -> Dictionary {
        Dictionary::parse("", "1\nplaceholder\n").unwrap()
    }

    fn suggest(strategy: &SuggestionStrategy, speller: &MockSpeller, word: &str) -> Vec<String> {
        let word = chars(word);
        let mut status = SuggestionStatus::new(&word, 5);
        strategy.generate(speller, &mut status);
        status.sort_suggestions();
        status.into_suggestions().into_iter().map(|s| s.word).collect()
    }

    #[test]
    fn single_edits_are_found_by_primaries() {
        let dict = empty_dict();
        let strategy = english_strategy(&dict, DEFAULT_MAX_COST);
        let speller = MockSpeller::new(&["environment", "hello", "world"]);
        assert!(suggest(&strategy, &speller, "enviornment").contains(&"environment".to_string()));
        assert!(suggest(&strategy, &speller, "helllo").contains(&"hello".to_string()));
        assert!(suggest(&strategy, &speller, "wrld").contains(&"world".to_string()));
    }

    #[test]
    fn secondaries_reach_two_edits() {
        let dict = empty_dict();
        let strategy = english_strategy(&dict, DEFAULT_MAX_COST);
        let speller = MockSpeller::new(&["believe"]);
        assert_eq!(suggest(&strategy, &speller, "beleev"), vec!["believe"]);
    }

    #[test]
    fn unknown_word_cost_is_bounded() {
        let dict = empty_dict();
        let strategy = english_strategy(&dict, DEFAULT_MAX_COST);
        let speller = MockSpeller::new(&["believe"]);
        let word = chars("oaieaohaofhaoi");
        let mut status = SuggestionStatus::new(&word, 5);
        strategy.generate(&speller, &mut status);
        assert_eq!(status.suggestion_count(), 0);
        // A split check may charge two lookups past the last abort check.
        assert!(status.current_cost() <= 2 * DEFAULT_MAX_COST + 1);
        assert!(status.current_cost() >= 2 * DEFAULT_MAX_COST);
    }

    #[test]
    fn rep_split_ranks_ahead_of_single_edits() {
        let dict = Dictionary::parse("REP 1\nREP alot a_lot\n", "1\nplaceholder\n").unwrap();
        let strategy = english_strategy(&dict, DEFAULT_MAX_COST);
        let speller = MockSpeller::new(&["a", "lot", "slot"]);
        let found = suggest(&strategy, &speller, "alot");
        assert_eq!(found.first().map(String::as_str), Some("a lot"));
        assert!(found.contains(&"lot".to_string()));
    }

    #[test]
    fn try_letters_are_filtered_and_deduplicated() {
        let dict = Dictionary::parse("TRY eE's-a\u{00E9}e\n", "1\nx\n").unwrap();
        assert_eq!(try_letters(&dict), vec!['e', 's', 'a']);
    }

    #[test]
    fn fallbacks_apply_without_try_and_key() {
        let dict = empty_dict();
        assert_eq!(try_letters(&dict).len(), 26);
        assert_eq!(keyboard_rows(&dict).len(), 3);
    }

    #[test]
    fn small_budget_terminates_without_suggestions() {
        let dict = empty_dict();
        let strategy = english_strategy(&dict, 1);
        let speller = MockSpeller::new(&["believe"]);
        assert!(suggest(&strategy, &speller, "xyzzyxyzzy").is_empty());
    }

    #[test]
    fn english_strategy_generator_counts() {
        let dict = empty_dict();
        let strategy = english_strategy(&dict, DEFAULT_MAX_COST);
        assert_eq!(strategy.primary_generators.len(), 8);
        assert_eq!(strategy.generators.len(), 1);
        assert_eq!(strategy.max_cost(), DEFAULT_MAX_COST);
    }
}
