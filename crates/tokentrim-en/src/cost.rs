// Token cost model: byte-pair-encoding token counts via tiktoken-rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tiktoken_rs::{CoreBPE, cl100k_base, o200k_base};

/// Error type for token counter construction.
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    /// The rank table for an encoding could not be loaded.
    #[error("failed to load {encoding} rank table: {reason}")]
    RankTable { encoding: Encoding, reason: String },

    /// An encoding name was not recognized.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
}

/// BPE vocabulary used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// GPT-4o family.
    #[default]
    O200kBase,
    /// GPT-4 / GPT-3.5 family.
    Cl100kBase,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::O200kBase => "o200k_base",
            Encoding::Cl100kBase => "cl100k_base",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Encoding {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "o200k_base" | "o200k" => Ok(Encoding::O200kBase),
            "cl100k_base" | "cl100k" => Ok(Encoding::Cl100kBase),
            other => Err(CostError::UnknownEncoding(other.to_string())),
        }
    }
}

/// Counts tokens exactly as the target model's tokenizer would.
///
/// Special-token text (`<|endoftext|>`) is encoded as ordinary text, so the
/// count never depends on what the user happens to type.
pub struct TokenCounter {
    bpe: CoreBPE,
    encoding: Encoding,
}

impl TokenCounter {
    /// Load the rank table for `encoding`.
    pub fn new(encoding: Encoding) -> Result<Self, CostError> {
        let loaded = match encoding {
            Encoding::O200kBase => o200k_base(),
            Encoding::Cl100kBase => cl100k_base(),
        };
        let bpe = loaded.map_err(|e| CostError::RankTable {
            encoding,
            reason: e.to_string(),
        })?;
        tracing::debug!(%encoding, "loaded token rank table");
        Ok(Self { bpe, encoding })
    }

    /// Counter for the default `o200k_base` vocabulary.
    pub fn o200k() -> Result<Self, CostError> {
        Self::new(Encoding::O200kBase)
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Number of tokens `text` consumes.
    pub fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        self.bpe.encode_ordinary(text).len()
    }

    /// `count(before) - count(after)`; negative when `after` costs more.
    pub fn savings(&self, before: &str, after: &str) -> i64 {
        self.count(before) as i64 - self.count(after) as i64
    }
}

impl fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCounter")
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}
