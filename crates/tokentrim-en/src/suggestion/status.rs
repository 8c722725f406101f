// Suggestion status tracking: abort conditions, cost budget, deduplication

use std::collections::HashSet;

/// A spelling candidate with its computed priority.
///
/// Lower priority values indicate better candidates.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The suggested word.
    pub word: String,
    /// Priority of the candidate (lower is better).
    pub priority: i32,
}

/// Tracks the state of candidate generation: found candidates, cost budget
/// and abort conditions.
///
/// Every dictionary lookup made while generating increments `current_cost`
/// by 1 via `charge()`.
pub struct SuggestionStatus<'a> {
    word: &'a [char],
    max_suggestions: usize,
    max_cost: usize,
    current_cost: usize,
    suggestions: Vec<Candidate>,
    seen: HashSet<String>,
}

impl<'a> SuggestionStatus<'a> {
    /// Create a new status for the given (lowercased) word.
    pub fn new(word: &'a [char], max_suggestions: usize) -> Self {
        Self {
            word,
            max_suggestions,
            max_cost: 0,
            current_cost: 0,
            suggestions: Vec::with_capacity(max_suggestions),
            seen: HashSet::new(),
        }
    }

    /// Returns `true` if no more candidates should be generated.
    ///
    /// Generation stops once enough candidates exist or the cost budget is
    /// spent. While nothing has been found the budget counts double.
    pub fn should_abort(&self) -> bool {
        if self.suggestions.len() >= self.max_suggestions {
            return true;
        }
        if self.current_cost < self.max_cost {
            return false;
        }
        if self.suggestions.is_empty() && self.current_cost < 2 * self.max_cost {
            return false;
        }
        true
    }

    /// Account for one dictionary lookup.
    pub fn charge(&mut self) {
        self.current_cost += 1;
    }

    pub fn set_max_cost(&mut self, max_cost: usize) {
        self.max_cost = max_cost;
    }

    pub fn current_cost(&self) -> usize {
        self.current_cost
    }

    /// Add a candidate with the given base priority.
    ///
    /// The final priority is `priority * (count + 5)`, so candidates found
    /// by earlier generators rank ahead of later ones. Duplicates and the
    /// misspelled word itself are ignored.
    pub fn add_suggestion(&mut self, suggestion: String, priority: i32) {
        if self.suggestions.len() >= self.max_suggestions {
            return;
        }
        if suggestion.chars().eq(self.word.iter().copied()) {
            return;
        }
        if !self.seen.insert(suggestion.clone()) {
            return;
        }
        let final_priority = priority * (self.suggestions.len() as i32 + 5);
        self.suggestions.push(Candidate {
            word: suggestion,
            priority: final_priority,
        });
    }

    /// Sort candidates by priority; equal priorities keep discovery order.
    pub fn sort_suggestions(&mut self) {
        self.suggestions.sort_by_key(|s| s.priority);
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions.len()
    }

    /// The word being corrected.
    pub fn word(&self) -> &'a [char] {
        self.word
    }

    pub fn word_len(&self) -> usize {
        self.word.len()
    }

    /// Consume the status and return the collected candidates.
    pub fn into_suggestions(self) -> Vec<Candidate> {
        self.suggestions
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }
}
