// Spell corrector: lazily loaded dictionary plus the suggestion strategy

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::OnceCell;

use tokentrim_core::enums::{DEFAULT_MAX_SUGGESTIONS, MAX_WORD_CHARS, MIN_CHECKED_WORD_CHARS};
use tokentrim_dict::{DictError, Dictionary};

use crate::speller::{DictionarySpeller, Speller};
use crate::suggestion::{DEFAULT_MAX_COST, SuggestionStatus, SuggestionStrategy, english_strategy};

/// Error type for dictionary loading and word checks.
#[derive(Debug, Error)]
pub enum SpellError {
    #[error("dictionary error: {0}")]
    Dictionary(#[from] DictError),
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word has {len} characters, at most {max} can be checked")]
    WordTooLong { len: usize, max: usize },
}

// ---------------------------------------------------------------------------
// Dictionary sources
// ---------------------------------------------------------------------------

/// Supplies the affix and word list data for a `SpellCorrector`.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    async fn load(&self) -> Result<Dictionary, SpellError>;
}

/// Dictionary data already held in memory, e.g. handed over by an
/// embedding application.
pub struct StaticSource {
    aff: Vec<u8>,
    dic: Vec<u8>,
}

impl StaticSource {
    pub fn new(aff: impl Into<Vec<u8>>, dic: impl Into<Vec<u8>>) -> Self {
        Self {
            aff: aff.into(),
            dic: dic.into(),
        }
    }
}

#[async_trait]
impl DictionarySource for StaticSource {
    async fn load(&self) -> Result<Dictionary, SpellError> {
        Ok(Dictionary::from_bytes(&self.aff, &self.dic)?)
    }
}

/// A `.aff`/`.dic` pair on disk.
pub struct FileSource {
    aff_path: PathBuf,
    dic_path: PathBuf,
}

impl FileSource {
    pub fn new(aff_path: impl Into<PathBuf>, dic_path: impl Into<PathBuf>) -> Self {
        Self {
            aff_path: aff_path.into(),
            dic_path: dic_path.into(),
        }
    }

    /// Source for `<dir>/<name>.aff` and `<dir>/<name>.dic`.
    pub fn in_dir(dir: &Path, name: &str) -> Self {
        Self::new(
            dir.join(format!("{name}.aff")),
            dir.join(format!("{name}.dic")),
        )
    }

    pub fn aff_path(&self) -> &Path {
        &self.aff_path
    }
}

fn read(path: &Path) -> Result<Vec<u8>, SpellError> {
    std::fs::read(path).map_err(|source| SpellError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[async_trait]
impl DictionarySource for FileSource {
    async fn load(&self) -> Result<Dictionary, SpellError> {
        let aff = read(&self.aff_path)?;
        let dic = read(&self.dic_path)?;
        tracing::debug!(aff = %self.aff_path.display(), "reading dictionary files");
        Ok(Dictionary::from_bytes(&aff, &dic)?)
    }
}

// ---------------------------------------------------------------------------
// Corrector
// ---------------------------------------------------------------------------

/// Result of checking one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCheck {
    pub correct: bool,
    pub suggestions: Vec<String>,
}

impl WordCheck {
    /// A word that needs no change.
    pub fn correct() -> Self {
        Self {
            correct: true,
            suggestions: Vec::new(),
        }
    }
}

struct Loaded {
    dict: Dictionary,
    strategy: SuggestionStrategy,
}

/// Checks words against a dictionary that is loaded on first use.
///
/// Concurrent callers share one load: `initialize` and `check_word` wait on
/// the same once-cell, and a failed load is retried by the next caller.
pub struct SpellCorrector {
    source: Box<dyn DictionarySource>,
    loaded: OnceCell<Loaded>,
    max_suggestions: usize,
    max_cost: usize,
}

impl SpellCorrector {
    pub fn new(source: impl DictionarySource + 'static) -> Self {
        Self {
            source: Box::new(source),
            loaded: OnceCell::new(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            max_cost: DEFAULT_MAX_COST,
        }
    }

    /// Corrector over in-memory `.aff`/`.dic` data.
    pub fn from_bytes(aff: impl Into<Vec<u8>>, dic: impl Into<Vec<u8>>) -> Self {
        Self::new(StaticSource::new(aff, dic))
    }

    /// Set the number of candidates returned per word. Must be called
    /// before the dictionary is loaded to affect the suggestion budget.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions.max(1);
        self
    }

    pub fn with_max_cost(mut self, max_cost: usize) -> Self {
        self.max_cost = max_cost;
        self
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    async fn loaded(&self) -> Result<&Loaded, SpellError> {
        self.loaded
            .get_or_try_init(|| async {
                let dict = self.source.load().await?;
                let strategy = english_strategy(&dict, self.max_cost);
                Ok(Loaded { dict, strategy })
            })
            .await
    }

    /// Load the dictionary. Later calls resolve immediately.
    pub async fn initialize(&self) -> Result<(), SpellError> {
        self.loaded().await.map(|_| ())
    }

    pub fn is_initialized(&self) -> bool {
        self.loaded.initialized()
    }

    /// The loaded dictionary, loading it if needed.
    pub async fn dictionary(&self) -> Result<&Dictionary, SpellError> {
        Ok(&self.loaded().await?.dict)
    }

    /// Check a word and, when it is misspelled, rank correction candidates.
    pub async fn check_word(&self, word: &str) -> Result<WordCheck, SpellError> {
        let loaded = self.loaded().await?;
        self.check_loaded(loaded, word)
    }

    fn check_loaded(&self, loaded: &Loaded, word: &str) -> Result<WordCheck, SpellError> {
        let lower: Vec<char> = word.to_lowercase().chars().collect();
        if lower.len() > MAX_WORD_CHARS {
            return Err(SpellError::WordTooLong {
                len: lower.len(),
                max: MAX_WORD_CHARS,
            });
        }
        if lower.len() < MIN_CHECKED_WORD_CHARS {
            return Ok(WordCheck::correct());
        }

        if DictionarySpeller::new(&loaded.dict)
            .spell(&lower, lower.len())
            .is_known()
        {
            return Ok(WordCheck::correct());
        }

        // Collect extra candidates, sort, then keep the best.
        let speller = DictionarySpeller::for_suggestions(&loaded.dict);
        let mut status = SuggestionStatus::new(&lower, self.max_suggestions * 3);
        loaded.strategy.generate(&speller, &mut status);
        status.sort_suggestions();
        tracing::debug!(
            word,
            candidates = status.suggestion_count(),
            cost = status.current_cost(),
            "misspelled word"
        );

        let suggestions = status
            .into_suggestions()
            .into_iter()
            .take(self.max_suggestions)
            .map(|c| c.word)
            .collect();
        Ok(WordCheck {
            correct: false,
            suggestions,
        })
    }
}
