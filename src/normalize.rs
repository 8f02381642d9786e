//! Text canonicalization for registry names.
//!
//! The normalizer turns a noisy free-text titular into a deterministic
//! upper-case ASCII form: diacritics stripped (so "ñ" → "n", "é" → "e"),
//! slashed-O variants folded to "O", "&" expanded to the word "Y",
//! punctuation replaced by spaces, whitespace collapsed, and optionally
//! stopwords, institutional terms, and single-letter tokens removed.
//!
//! Re-running [`normalize`] on its own output with the same configuration is
//! a no-op, which downstream comparisons rely on: a stored soft form can be
//! fed back through the pipeline without drifting.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::catalog::{INSTITUTIONAL_TERMS, STOPWORDS};

/// Configuration for name normalization. Each filter is independent; the
/// token filters are applied in a fixed order (institutional terms, then
/// stopwords, then single-letter tokens) so results are reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Remove all remaining whitespace after token filtering.
    pub strip_spaces: bool,
    /// Drop tokens found in the stopword catalog.
    pub remove_stopwords: bool,
    /// Drop tokens found in the institutional/mercantile catalog.
    pub remove_institutional_terms: bool,
    /// Drop tokens that are a single character (residue of "S.A. de C.V.").
    pub remove_single_letter_tokens: bool,
}

impl NormalizeConfig {
    /// Soft standardization: all token filters on, spaces kept. This is the
    /// form the metric suite and the length gate operate on.
    pub fn soft() -> Self {
        Self {
            strip_spaces: false,
            remove_stopwords: true,
            remove_institutional_terms: true,
            remove_single_letter_tokens: true,
        }
    }
}

/// Normalize a single name. `None` flows through as `None`; it is not an
/// error to receive an absent value from a sparse registry column.
pub fn normalize(text: Option<&str>, cfg: &NormalizeConfig) -> Option<String> {
    let text = text?;

    // Decompose, drop combining marks, fold the survivors to ASCII. Anything
    // that is still not ASCII after decomposition carries no lexical signal
    // for these registries and is dropped, matching the source pipeline.
    let mut folded = String::with_capacity(text.len());
    for ch in text.nfd() {
        if is_combining_mark(ch) {
            continue;
        }
        match ch {
            'Ø' | 'ø' => folded.push('O'),
            '&' => folded.push_str(" Y "),
            '.' | ',' | '(' | ')' | '"' | '\'' => folded.push(' '),
            _ if ch.is_ascii() => folded.push(ch),
            _ => {}
        }
    }

    // Collapse whitespace runs, trim, upper-case.
    let mut canonical = String::with_capacity(folded.len());
    for segment in folded.split_whitespace() {
        if !canonical.is_empty() {
            canonical.push(' ');
        }
        for ch in segment.chars() {
            canonical.push(ch.to_ascii_uppercase());
        }
    }

    // Token filters. Order matters and is fixed: institutional terms first,
    // then stopwords, then single-letter tokens.
    let mut tokens: Vec<&str> = canonical.split_whitespace().collect();
    if cfg.remove_institutional_terms {
        tokens.retain(|t| !INSTITUTIONAL_TERMS.contains(t));
    }
    if cfg.remove_stopwords {
        tokens.retain(|t| !STOPWORDS.contains(t));
    }
    if cfg.remove_single_letter_tokens {
        tokens.retain(|t| t.chars().count() > 1);
    }

    let joined = tokens.join(" ");
    if cfg.strip_spaces {
        Some(joined.split_whitespace().collect())
    } else {
        Some(joined)
    }
}

/// Split a normalized string into whitespace-delimited tokens, discarding
/// empty fragments. Order-preserving.
pub fn tokenize(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

/// Normalize a table column row-wise. Row order and null positions are
/// preserved; rows are independent, so the map runs on the rayon pool.
pub fn normalize_column<S>(values: &[Option<S>], cfg: &NormalizeConfig) -> Vec<Option<String>>
where
    S: AsRef<str> + Sync,
{
    values
        .par_iter()
        .map(|v| normalize(v.as_ref().map(AsRef::as_ref), cfg))
        .collect()
}
