// TrimEngine: runs every suggestion pass over a prompt
//
// Owns the spell corrector (lazily loaded dictionary), the token counter and
// the optional adverb tagger. `process_prompt_text` awaits the paragraph
// spell-check pass, then runs the phrase rewriter and the deletion finder
// synchronously, and returns their results in that order.

use hashbrown::HashSet;
use serde::Deserialize;
use thiserror::Error;

use tokentrim_core::enums::{DEFAULT_MAX_CHECKED_WORDS, DEFAULT_MAX_SUGGESTIONS};
use tokentrim_core::{Suggestion, SuggestionKind};

use crate::corrector::{DictionarySource, SpellCorrector, SpellError, WordCheck};
use crate::cost::{CostError, Encoding, TokenCounter};
use crate::deletion::{AdverbTagger, DeletionOptions, LexiconAdverbTagger, find_deletions};
use crate::paragraph::analyze_paragraph;
use crate::rewrite::{ConciseOptions, make_concise};
use crate::suggestion::DEFAULT_MAX_COST;

/// Error type for engine construction and prompt processing.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The dictionary could not be loaded.
    #[error("engine initialization failed: {0}")]
    Initialization(#[source] SpellError),

    /// The token rank table could not be loaded.
    #[error(transparent)]
    Cost(#[from] CostError),

    /// A single-word check failed.
    #[error(transparent)]
    Spell(SpellError),
}

/// Engine configuration. Every field has a default, so a config file only
/// needs the values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Distinct words spell checked per prompt.
    pub max_words: usize,
    /// Candidates considered per misspelled word.
    pub max_suggestions: usize,
    /// Dictionary lookups allowed per misspelled word.
    pub max_cost: usize,
    pub encoding: Encoding,
    pub spellcheck: bool,
    pub rewrite: bool,
    pub deletions: bool,
    /// Drop suggestions whose `(before, after)` pair was already reported.
    pub dedupe: bool,
    /// Drop suggestions saving fewer tokens than this.
    pub min_tokens_saved: Option<i64>,
    /// Use the built-in adverb lexicon when no other tagger is installed.
    pub tag_adverbs: bool,
    pub concise: ConciseOptions,
    pub deletion: DeletionOptions,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_CHECKED_WORDS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_cost: DEFAULT_MAX_COST,
            encoding: Encoding::default(),
            spellcheck: true,
            rewrite: true,
            deletions: true,
            dedupe: true,
            min_tokens_saved: None,
            tag_adverbs: true,
            concise: ConciseOptions::default(),
            deletion: DeletionOptions::default(),
        }
    }
}

/// Prompt-shortening engine.
pub struct TrimEngine {
    corrector: SpellCorrector,
    counter: TokenCounter,
    tagger: Option<Box<dyn AdverbTagger>>,
    options: EngineOptions,
}

impl TrimEngine {
    /// Assemble an engine from ready-made services with default options.
    pub fn new(corrector: SpellCorrector, counter: TokenCounter) -> Self {
        Self {
            corrector,
            counter,
            tagger: Some(Box::new(LexiconAdverbTagger)),
            options: EngineOptions::default(),
        }
    }

    /// Build the corrector and counter described by `options`.
    ///
    /// The dictionary is not read until the first check or `initialize`.
    pub fn with_options(
        source: impl DictionarySource + 'static,
        options: EngineOptions,
    ) -> Result<Self, EngineError> {
        let corrector = SpellCorrector::new(source)
            .with_max_suggestions(options.max_suggestions)
            .with_max_cost(options.max_cost);
        let counter = TokenCounter::new(options.encoding)?;
        let tagger: Option<Box<dyn AdverbTagger>> = if options.tag_adverbs {
            Some(Box::new(LexiconAdverbTagger))
        } else {
            None
        };
        Ok(Self {
            corrector,
            counter,
            tagger,
            options,
        })
    }

    /// Engine over in-memory `.aff`/`.dic` data with default options.
    pub fn from_bytes(aff: impl Into<Vec<u8>>, dic: impl Into<Vec<u8>>) -> Result<Self, EngineError> {
        Ok(Self::new(
            SpellCorrector::from_bytes(aff, dic),
            TokenCounter::o200k()?,
        ))
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn set_max_words(&mut self, value: usize) {
        self.options.max_words = value;
    }

    pub fn set_spellcheck(&mut self, value: bool) {
        self.options.spellcheck = value;
    }

    pub fn set_rewrite(&mut self, value: bool) {
        self.options.rewrite = value;
    }

    pub fn set_deletions(&mut self, value: bool) {
        self.options.deletions = value;
    }

    pub fn set_dedupe(&mut self, value: bool) {
        self.options.dedupe = value;
    }

    pub fn set_min_tokens_saved(&mut self, value: Option<i64>) {
        self.options.min_tokens_saved = value;
    }

    pub fn set_concise_options(&mut self, value: ConciseOptions) {
        self.options.concise = value;
    }

    pub fn set_deletion_options(&mut self, value: DeletionOptions) {
        self.options.deletion = value;
    }

    /// Replace the adverb tagger; `None` disables adverb deletions.
    pub fn set_adverb_tagger(&mut self, tagger: Option<Box<dyn AdverbTagger>>) {
        self.options.tag_adverbs = tagger.is_some();
        self.tagger = tagger;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Load the dictionary. Later calls resolve immediately.
    pub async fn initialize(&self) -> Result<(), EngineError> {
        self.corrector
            .initialize()
            .await
            .map_err(EngineError::Initialization)
    }

    pub fn count_tokens(&self, text: &str) -> usize {
        self.counter.count(text)
    }

    pub fn counter(&self) -> &TokenCounter {
        &self.counter
    }

    pub fn corrector(&self) -> &SpellCorrector {
        &self.corrector
    }

    pub async fn check_word(&self, word: &str) -> Result<WordCheck, EngineError> {
        self.initialize().await?;
        self.corrector.check_word(word).await.map_err(EngineError::Spell)
    }

    pub fn make_concise(&self, text: &str) -> String {
        make_concise(text, &self.options.concise)
    }

    /// Run every enabled pass over `text`.
    ///
    /// Results are the spell-check suggestions, then at most one
    /// `Replacement` covering the whole text, then deletions. Spans from
    /// different passes may overlap; applying them is up to the caller.
    pub async fn process_prompt_text(&self, text: &str) -> Result<Vec<Suggestion>, EngineError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        let opts = &self.options;
        let mut collected = Vec::new();

        if opts.spellcheck {
            let found = analyze_paragraph(&self.corrector, &self.counter, text, opts.max_words)
                .await
                .map_err(EngineError::Initialization)?;
            collected.extend(found);
        }

        if opts.rewrite {
            let rewritten = make_concise(text, &opts.concise);
            if rewritten != text {
                let saved = self.counter.savings(text, &rewritten);
                collected.push(Suggestion::new(
                    SuggestionKind::Replacement,
                    text,
                    rewritten,
                    saved,
                ));
            }
        }

        if opts.deletions {
            collected.extend(find_deletions(
                text,
                &opts.deletion,
                self.tagger.as_deref(),
                &self.counter,
            ));
        }

        let mut seen: HashSet<(String, String)> = HashSet::new();
        let result: Vec<Suggestion> = collected
            .into_iter()
            .filter(|s| opts.min_tokens_saved.is_none_or(|min| s.tokens_saved >= min))
            .filter(|s| !opts.dedupe || seen.insert((s.before.clone(), s.after.clone())))
            .collect();

        tracing::debug!(suggestions = result.len(), "processed prompt");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const AFF: &str = "TRY esianrtolcdugmphbyfvkwzxqj\n";
    const DIC: &str = "10\nhelp\nme\nfix\nthis\nenvironment\nplease\nin\norder\nto\nreally\n";

    fn engine() -> TrimEngine {
        TrimEngine::from_bytes(AFF, DIC).unwrap()
    }

    fn kinds(found: &[Suggestion]) -> Vec<SuggestionKind> {
        found.iter().map(|s| s.kind).collect()
    }

    #[tokio::test]
    async fn blank_text_has_no_suggestions() {
        let e = engine();
        assert!(e.process_prompt_text("").await.unwrap().is_empty());
        assert!(e.process_prompt_text("  \n\t").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn passes_are_concatenated_in_order() {
        let e = engine();
        let found = e
            .process_prompt_text("Please fix this enviornment in order to help me")
            .await
            .unwrap();
        assert_eq!(
            kinds(&found),
            vec![
                SuggestionKind::Spellcheck,
                SuggestionKind::Replacement,
                SuggestionKind::Deletion,
            ]
        );
        assert_eq!(found[1].before, "Please fix this enviornment in order to help me");
        assert_eq!(found[1].after, "Please fix this enviornment to help me");
        assert_eq!(found[2].before, "Please ");
    }

    #[tokio::test]
    async fn unchanged_rewrite_is_not_reported() {
        let e = engine();
        let found = e.process_prompt_text("help me").await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn passes_can_be_disabled() {
        let mut e = engine();
        e.set_spellcheck(false);
        e.set_rewrite(false);
        let found = e.process_prompt_text("Please fix enviornment").await.unwrap();
        assert_eq!(kinds(&found), vec![SuggestionKind::Deletion]);
    }

    #[tokio::test]
    async fn min_tokens_saved_filters() {
        let mut e = engine();
        e.set_min_tokens_saved(Some(i64::MAX));
        let found = e.process_prompt_text("Please fix enviornment").await.unwrap();
        assert!(found.is_empty());
    }

    struct LeadingWordTagger;

    impl AdverbTagger for LeadingWordTagger {
        fn adverb_spans(&self, _text: &str) -> Vec<std::ops::Range<usize>> {
            vec![0..7]
        }
    }

    #[tokio::test]
    async fn exact_duplicates_are_dropped() {
        let mut e = engine();
        e.set_adverb_tagger(Some(Box::new(LeadingWordTagger)));
        let found = e.process_prompt_text("Please fix this").await.unwrap();
        assert_eq!(found, vec![Suggestion::deletion("Please ", e.count_tokens("Please ") as i64)]);

        e.set_dedupe(false);
        let found = e.process_prompt_text("Please fix this").await.unwrap();
        assert_eq!(found.len(), 2);
    }

    #[tokio::test]
    async fn broken_dictionary_is_an_initialization_error() {
        let e = TrimEngine::from_bytes("SET KOI8-R\n", DIC).unwrap();
        assert!(matches!(
            e.process_prompt_text("hello").await,
            Err(EngineError::Initialization(_))
        ));
        // Passes that do not need the dictionary still work without it.
        let mut e = e;
        e.set_spellcheck(false);
        assert!(e.process_prompt_text("Please fix").await.is_ok());
    }

    #[test]
    fn options_from_toml_like_data() {
        let opts: EngineOptions =
            serde_json::from_str(r#"{"max_words": 10, "encoding": "cl100k_base", "concise": {"aggressive": true}}"#)
                .unwrap();
        assert_eq!(opts.max_words, 10);
        assert_eq!(opts.encoding, Encoding::Cl100kBase);
        assert!(opts.concise.aggressive);
        assert!(opts.concise.remove_fillers);
        assert!(opts.spellcheck);
        assert_eq!(opts.min_tokens_saved, None);
    }

    #[test]
    fn disabling_the_tagger_updates_options() {
        let mut e = engine();
        e.set_adverb_tagger(None);
        assert!(!e.options().tag_adverbs);
        assert_eq!(e.count_tokens(""), 0);
    }
}
