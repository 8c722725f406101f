// Spelling suggestion generation
//
// Produces correction candidates for misspelled words by applying edit
// operations (deletion, insertion, replacement, swap, splits, REP table)
// and validating them through the speller.
//
//   - `generators`: individual edit-operation generators
//   - `status`: abort conditions, cost budget, deduplication
//   - `strategy`: composes generators into the English typing pipeline

pub mod generators;
pub mod status;
pub mod strategy;

pub use generators::SuggestionGenerator;
pub use status::{Candidate, SuggestionStatus};
pub use strategy::{DEFAULT_MAX_COST, SuggestionStrategy, english_strategy};
