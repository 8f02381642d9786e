//! Pairwise match engine: soft normalization, length gate, metric suite,
//! rule-based classification, and conflict extraction, in that order.
//!
//! Every request is stateless and independent; [`compare`] is a pure,
//! synchronous, CPU-bound function, so callers may fan pairs out across a
//! worker pool freely. [`compare_pairs`] does exactly that on the rayon pool
//! while preserving input order.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::diff::conflicting_characters;
use crate::metrics::{cosine_qgrams, jaccard, jaro_winkler, token_set_ratio};
use crate::normalize::normalize;
use crate::types::{MatchConfig, MatchError, MatchResult, MatchVerdict};

#[cfg(test)]
mod tests;

/// Cheap length-based prefilter over the soft-normalized forms. A true
/// result means the pair is definitively non-matching and the metric suite
/// is skipped entirely.
pub fn should_reject_on_length(a_std: &str, b_std: &str) -> bool {
    let len_a = a_std.chars().count();
    let len_b = b_std.chars().count();
    let lmax = len_a.max(len_b);
    // Too short to be informative either way.
    if lmax <= 3 {
        return false;
    }
    let abs_threshold = 5.max((0.20 * lmax as f64).round() as usize);
    let rel_threshold = if lmax < 10 { 0.40 } else { 0.50 };
    let gap_abs = len_a.abs_diff(len_b);
    let gap_rel = gap_abs as f64 / lmax as f64;
    gap_abs > abs_threshold && gap_rel > rel_threshold
}

/// Conservative same/different/indeterminate rules over the four metrics.
/// Jaccard participates only in the `Same` rule, never in the aggregate
/// score; that asymmetry is part of the tuned rule set.
fn classify(jw: f64, ts: f64, cq: f64, jac: f64) -> MatchVerdict {
    let same = (jw >= 93.0 && ts >= 93.0)
        || (ts >= 95.0 && cq >= 92.0)
        || (jw >= 90.0 && jac >= 75.0);
    if same {
        MatchVerdict::Same
    } else if jw < 85.0 && ts < 85.0 {
        MatchVerdict::Different
    } else {
        MatchVerdict::Indeterminate
    }
}

fn compare_validated(a: Option<&str>, b: Option<&str>, cfg: &MatchConfig) -> MatchResult {
    let a_raw = a.unwrap_or("");
    let b_raw = b.unwrap_or("");
    let a_std = normalize(a, &cfg.normalize).unwrap_or_default();
    let b_std = normalize(b, &cfg.normalize).unwrap_or_default();

    if should_reject_on_length(&a_std, &b_std) {
        trace!(a_std = %a_std, b_std = %b_std, "length gate fired, pair rejected");
        return MatchResult {
            score: 0.0,
            verdict: MatchVerdict::Different,
            conflicts: Vec::new(),
        };
    }

    // Edit-similarity and token-set ratio run on the raw originals; the
    // token and q-gram metrics run on the soft forms.
    let jw = jaro_winkler(a_raw, b_raw);
    let ts = token_set_ratio(a_raw, b_raw);
    let cq = cosine_qgrams(&a_std, &b_std, cfg.qgram_len);
    let jac = jaccard(&a_std, &b_std);

    let verdict = classify(jw, ts, cq, jac);
    let score = 0.4 * jw + 0.4 * ts + 0.2 * cq;
    debug!(jw, ts, cq, jac, score, ?verdict, "pair compared");

    let conflicts = match verdict {
        MatchVerdict::Same => conflicting_characters(a_raw, b_raw),
        MatchVerdict::Different | MatchVerdict::Indeterminate => Vec::new(),
    };

    MatchResult {
        score,
        verdict,
        conflicts,
    }
}

/// Compare two titular names. Either side may be absent; absence is not an
/// error and degrades to the empty string throughout the metric suite.
pub fn compare(
    a: Option<&str>,
    b: Option<&str>,
    cfg: &MatchConfig,
) -> Result<MatchResult, MatchError> {
    cfg.validate()?;
    Ok(compare_validated(a, b, cfg))
}

/// Compare many independent pairs on the rayon pool. The configuration is
/// validated once up front; output order matches input order.
pub fn compare_pairs(
    pairs: &[(Option<String>, Option<String>)],
    cfg: &MatchConfig,
) -> Result<Vec<MatchResult>, MatchError> {
    cfg.validate()?;
    Ok(pairs
        .par_iter()
        .map(|(a, b)| compare_validated(a.as_deref(), b.as_deref(), cfg))
        .collect())
}
