use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::NormalizeConfig;

/// Three-way verdict for a compared pair. Closed set; downstream clustering
/// must handle every variant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchVerdict {
    /// The two names denote the same title holder.
    Same,
    /// The two names denote different title holders.
    Different,
    /// Evidence is insufficient either way; route to manual review.
    Indeterminate,
}

/// One character-level conflict between the two original strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CharacterEdit {
    /// `from` in the first string is aligned against `to` in the second.
    Substitute { from: char, to: char },
    /// `from` is present only in the first string.
    Delete { from: char },
    /// `to` is present only in the second string.
    Insert { to: char },
}

/// Outcome of a single pairwise comparison. Constructed fresh per call,
/// immutable, never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// Aggregate score in `[0, 100]`: `0.4·jw + 0.4·ts + 0.2·cq`.
    pub score: f64,
    /// Rule-based verdict.
    pub verdict: MatchVerdict,
    /// Character conflicts between the originals; populated only for
    /// [`MatchVerdict::Same`], and still empty when the originals are equal.
    pub conflicts: Vec<CharacterEdit>,
}

/// Configuration for a single pairwise comparison.
///
/// Cheap to copy and serde-friendly so it can be embedded in higher-level
/// pipeline configs or passed across process boundaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Normalization applied to produce the soft forms the token metrics and
    /// the length gate operate on.
    #[serde(default = "NormalizeConfig::soft")]
    pub normalize: NormalizeConfig,
    /// Character q-gram length for the cosine metric. Must be positive.
    #[serde(default = "MatchConfig::default_qgram_len")]
    pub qgram_len: usize,
}

impl MatchConfig {
    pub(crate) fn default_qgram_len() -> usize {
        3
    }

    /// Validate the configuration for a single request. Invalid values are
    /// rejected here, before any normalization or metric work starts; they
    /// are never coerced to a default.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.qgram_len == 0 {
            return Err(MatchError::InvalidConfig(
                "qgram_len must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeConfig::soft(),
            qgram_len: Self::default_qgram_len(),
        }
    }
}

/// Errors produced by the matching core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Invalid per-call configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
