//! # Cotejo
//!
//! ## Purpose
//!
//! `cotejo` is the analytical core of a record-linkage pipeline over
//! administrative registries: given two free-text title-holder names, decide
//! whether they denote the same underlying legal or physical entity. It
//! normalizes noisy names, scores the pair under four independent similarity
//! metrics, applies a conservative rule-based classifier, and, when a match
//! is declared, reports the exact character-level edits between the two
//! original strings.
//!
//! Bulk file conversion, columnar loading, reshaping, and candidate-pair
//! generation all live with the callers; this crate only ever sees two
//! strings (or nulls) per request and hands back one [`MatchResult`].
//!
//! ## Core Types
//!
//! - [`NormalizeConfig`]: independent toggles for the canonicalization
//!   filters; [`NormalizeConfig::soft`] is the form the metrics run on.
//! - [`MatchConfig`]: per-request tuning (normalization + q-gram length)
//!   with up-front [`MatchConfig::validate`] at the call boundary.
//! - [`MatchVerdict`]: closed `Same` / `Different` / `Indeterminate` union.
//! - [`CharacterEdit`]: one substitution, deletion, or insertion between the
//!   original strings.
//! - [`MatchResult`]: aggregate score in `[0, 100]`, verdict, and the
//!   ordered conflict list.
//!
//! ## Example Usage
//!
//! ```
//! use cotejo::{compare, MatchConfig, MatchVerdict};
//!
//! let result = compare(
//!     Some("GRUPO AGRICOLA DEL NORTE SA DE CV"),
//!     Some("GRUPO AGRICOLA NORTE"),
//!     &MatchConfig::default(),
//! )
//! .expect("default config is valid");
//!
//! assert_eq!(result.verdict, MatchVerdict::Same);
//! assert!(!result.conflicts.is_empty());
//! ```
//!
//! ## Concurrency
//!
//! Every entry point is a pure function over its inputs; the only shared
//! state is a pair of read-only token catalogs initialized on first use.
//! Results are bit-for-bit reproducible for identical inputs and
//! configuration, which downstream clustering relies on. [`compare_pairs`]
//! and [`normalize_column`] fan independent rows out across the rayon pool
//! without locks or ordering dependencies.

pub mod catalog;
pub mod diff;
pub mod engine;
pub mod metrics;
pub mod normalize;
pub mod types;

pub use crate::diff::conflicting_characters;
pub use crate::engine::{compare, compare_pairs, should_reject_on_length};
pub use crate::metrics::{cosine_qgrams, jaccard, jaro_winkler, token_set_ratio};
pub use crate::normalize::{normalize, normalize_column, tokenize, NormalizeConfig};
pub use crate::types::{CharacterEdit, MatchConfig, MatchError, MatchResult, MatchVerdict};
