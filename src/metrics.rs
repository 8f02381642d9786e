//! Similarity metric suite.
//!
//! Four independent metrics, each a pure function returning a score in
//! `[0.0, 100.0]`:
//!
//! - [`jaccard`] — token-set Jaccard over the soft-normalized forms.
//! - [`cosine_qgrams`] — cosine over character q-gram count vectors of the
//!   soft-normalized forms.
//! - [`jaro_winkler`] — canonical Jaro-Winkler over the raw originals. Kept
//!   case-, accent-, and punctuation-sensitive on purpose: the prefix boost
//!   over the untouched strings is a strong signal for registry names that
//!   share a leading trade name.
//! - [`token_set_ratio`] — best-alignment token-set comparison over the raw
//!   originals, scored by LCS-based sequence ratio.
//!
//! All accumulation over q-gram profiles is integer-valued, so every metric
//! is bit-for-bit reproducible regardless of hash-map iteration order.

use std::collections::{BTreeSet, HashMap};

/// Token-set Jaccard similarity in `[0, 100]`. Both token sets empty is a
/// defined case and scores `0.0`.
pub fn jaccard(a_std: &str, b_std: &str) -> f64 {
    let a: BTreeSet<&str> = a_std.split_whitespace().collect();
    let b: BTreeSet<&str> = b_std.split_whitespace().collect();
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let inter = a.intersection(&b).count();
    let union = a.union(&b).count();
    100.0 * inter as f64 / union as f64
}

/// Character q-gram occurrence counts for a string. Empty when the string is
/// shorter than `q`.
fn qgram_profile(s: &str, q: usize) -> HashMap<String, u64> {
    let chars: Vec<char> = s.chars().flat_map(char::to_uppercase).collect();
    let mut profile = HashMap::new();
    if q == 0 || chars.len() < q {
        return profile;
    }
    for window in chars.windows(q) {
        *profile.entry(window.iter().collect::<String>()).or_insert(0) += 1;
    }
    profile
}

/// Cosine similarity over character q-gram count vectors, in `[0, 100]`.
/// Either profile empty (string shorter than `q`) scores `0.0`.
pub fn cosine_qgrams(a_std: &str, b_std: &str, q: usize) -> f64 {
    let pa = qgram_profile(a_std, q);
    let pb = qgram_profile(b_std, q);
    if pa.is_empty() || pb.is_empty() {
        return 0.0;
    }
    let dot: u64 = pa
        .iter()
        .map(|(gram, &ca)| ca * pb.get(gram).copied().unwrap_or(0))
        .sum();
    let norm_a: u64 = pa.values().map(|&c| c * c).sum();
    let norm_b: u64 = pb.values().map(|&c| c * c).sum();
    let cos = dot as f64 / ((norm_a as f64).sqrt() * (norm_b as f64).sqrt());
    (100.0 * cos).min(100.0)
}

/// Base Jaro similarity in `[0, 1]`.
fn jaro(a: &[char], b: &[char]) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let match_window = (a.len().max(b.len()) / 2).saturating_sub(1);
    let mut a_matched = vec![false; a.len()];
    let mut b_matched = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &ch) in a.iter().enumerate() {
        let start = i.saturating_sub(match_window);
        let end = (i + match_window + 1).min(b.len());
        for j in start..end {
            if b_matched[j] || b[j] != ch {
                continue;
            }
            a_matched[i] = true;
            b_matched[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0usize;
    for (i, &matched) in a_matched.iter().enumerate() {
        if !matched {
            continue;
        }
        while !b_matched[k] {
            k += 1;
        }
        if a[i] != b[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = (transpositions / 2) as f64;
    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}

/// Jaro-Winkler similarity over the raw, unnormalized strings, in `[0, 100]`.
///
/// The Winkler prefix boost (factor 0.1, prefix capped at 4 characters) is
/// applied only when the base Jaro score exceeds 0.7, mirroring the canonical
/// algorithm. The boost makes the metric not guaranteed symmetric near that
/// threshold; callers must not assume `jaro_winkler(a, b) == jaro_winkler(b, a)`.
pub fn jaro_winkler(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let base = jaro(&a_chars, &b_chars);
    let score = if base > 0.7 {
        let prefix = a_chars
            .iter()
            .zip(&b_chars)
            .take(4)
            .take_while(|(x, y)| x == y)
            .count();
        base + prefix as f64 * 0.1 * (1.0 - base)
    } else {
        base
    };
    100.0 * score
}

/// Length of the longest common subsequence of two char slices. Two-row DP;
/// the compared strings here are short registry names, O(m·n) is fine.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
        curr.iter_mut().for_each(|x| *x = 0);
    }
    prev[b.len()]
}

/// LCS-based sequence ratio of two strings, in `[0, 100]`.
fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs_length(&a, &b) as f64 / total as f64
}

/// Best-alignment token-set ratio over the raw, unnormalized strings, in
/// `[0, 100]`.
///
/// Tokens are deduplicated and sorted; the intersection and the two
/// set-differences produce three candidate strings whose pairwise sequence
/// ratios are compared, taking the maximum. Full token containment therefore
/// scores 100 even when one name carries extra boilerplate.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let sect: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let joined_sect = sect.join(" ");
    let joined_ab = join_sections(&joined_sect, &diff_ab);
    let joined_ba = join_sections(&joined_sect, &diff_ba);

    sequence_ratio(&joined_sect, &joined_ab)
        .max(sequence_ratio(&joined_sect, &joined_ba))
        .max(sequence_ratio(&joined_ab, &joined_ba))
}

fn join_sections(sect: &str, diff: &[&str]) -> String {
    if diff.is_empty() {
        return sect.to_string();
    }
    let tail = diff.join(" ");
    if sect.is_empty() {
        tail
    } else {
        format!("{sect} {tail}")
    }
}
