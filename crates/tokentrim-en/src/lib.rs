// tokentrim-en: English prompt-shortening engine
//
// Finds token-saving edits in a prompt: spelling corrections chosen by
// token cost, a concise rewrite of verbose phrasing, and removable
// politeness and adverb spans. `TrimEngine` runs all passes; each pass is
// also usable on its own.

pub mod corrector;
pub mod cost;
pub mod deletion;
pub mod engine;
pub mod instruction;
pub mod paragraph;
pub mod rewrite;
pub mod speller;
pub mod suggestion;
pub mod tokenizer;

pub use corrector::{DictionarySource, FileSource, SpellCorrector, SpellError, StaticSource, WordCheck};
pub use cost::{CostError, Encoding, TokenCounter};
pub use deletion::{AdverbTagger, DeletionOptions, LexiconAdverbTagger, find_deletions};
pub use engine::{EngineError, EngineOptions, TrimEngine};
pub use instruction::{
    ConcisenessLevel, InstructionSpec, OptimizationStats, OutputStrategy, Position,
    ResponseFormat, optimization_stats, optimize_batch, optimize_for_concise_output,
};
pub use paragraph::analyze_paragraph;
pub use rewrite::{ConciseOptions, ReductionStats, make_concise, reduction_stats};
pub use tokentrim_core::{Suggestion, SuggestionKind};
