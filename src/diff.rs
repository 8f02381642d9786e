//! Character-level edit extraction between two original names.
//!
//! Alignment follows the Ratcliff-Obershelp scheme: recursively find the
//! longest block of characters common to both strings, then align the
//! regions left and right of it. No junk heuristic is applied; every
//! character is significant, including repeated common substrings. The
//! aligned blocks are folded into an edit script of
//! `equal | replace | delete | insert` opcodes, and the non-equal opcodes are
//! flattened into per-character [`CharacterEdit`] values.

use std::collections::{HashMap, HashSet};

use crate::types::CharacterEdit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpTag {
    Equal,
    Replace,
    Delete,
    Insert,
}

/// Half-open index ranges into the two char sequences.
#[derive(Debug, Clone, Copy)]
struct Opcode {
    tag: OpTag,
    a_start: usize,
    a_end: usize,
    b_start: usize,
    b_end: usize,
}

/// A maximal common block: `a[a_pos..a_pos+len] == b[b_pos..b_pos+len]`.
#[derive(Debug, Clone, Copy)]
struct Block {
    a_pos: usize,
    b_pos: usize,
    len: usize,
}

/// Longest block common to `a[a_lo..a_hi]` and `b[b_lo..b_hi]`. Ties resolve
/// to the earliest position in `a`, then in `b`, so the alignment is
/// deterministic.
fn longest_match(
    a: &[char],
    b_index: &HashMap<char, Vec<usize>>,
    a_lo: usize,
    a_hi: usize,
    b_lo: usize,
    b_hi: usize,
) -> Block {
    let mut best = Block {
        a_pos: a_lo,
        b_pos: b_lo,
        len: 0,
    };
    // run_lengths[j] = length of the common run ending at a[i], b[j].
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();
    for i in a_lo..a_hi {
        let mut next_runs: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b_index.get(&a[i]) {
            for &j in positions {
                if j < b_lo {
                    continue;
                }
                if j >= b_hi {
                    break;
                }
                let k = j
                    .checked_sub(1)
                    .and_then(|prev| run_lengths.get(&prev).copied())
                    .unwrap_or(0)
                    + 1;
                next_runs.insert(j, k);
                if k > best.len {
                    best = Block {
                        a_pos: i + 1 - k,
                        b_pos: j + 1 - k,
                        len: k,
                    };
                }
            }
        }
        run_lengths = next_runs;
    }
    best
}

/// All maximal common blocks of `a` and `b`, sorted by position, adjacent
/// blocks merged, with a zero-length terminator at the end.
fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, &ch) in b.iter().enumerate() {
        b_index.entry(ch).or_default().push(j);
    }

    let mut queue = vec![(0usize, a.len(), 0usize, b.len())];
    let mut raw = Vec::new();
    while let Some((a_lo, a_hi, b_lo, b_hi)) = queue.pop() {
        let block = longest_match(a, &b_index, a_lo, a_hi, b_lo, b_hi);
        if block.len > 0 {
            if a_lo < block.a_pos && b_lo < block.b_pos {
                queue.push((a_lo, block.a_pos, b_lo, block.b_pos));
            }
            if block.a_pos + block.len < a_hi && block.b_pos + block.len < b_hi {
                queue.push((block.a_pos + block.len, a_hi, block.b_pos + block.len, b_hi));
            }
            raw.push(block);
        }
    }
    raw.sort_by_key(|blk| (blk.a_pos, blk.b_pos));

    // Merge blocks that abut in both sequences.
    let mut merged: Vec<Block> = Vec::with_capacity(raw.len() + 1);
    for block in raw {
        match merged.last_mut() {
            Some(prev)
                if prev.a_pos + prev.len == block.a_pos
                    && prev.b_pos + prev.len == block.b_pos =>
            {
                prev.len += block.len;
            }
            _ => merged.push(block),
        }
    }
    merged.push(Block {
        a_pos: a.len(),
        b_pos: b.len(),
        len: 0,
    });
    merged
}

/// Minimal edit script between two char sequences.
fn opcodes(a: &[char], b: &[char]) -> Vec<Opcode> {
    let mut ops = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    for block in matching_blocks(a, b) {
        let tag = match (i < block.a_pos, j < block.b_pos) {
            (true, true) => Some(OpTag::Replace),
            (true, false) => Some(OpTag::Delete),
            (false, true) => Some(OpTag::Insert),
            (false, false) => None,
        };
        if let Some(tag) = tag {
            ops.push(Opcode {
                tag,
                a_start: i,
                a_end: block.a_pos,
                b_start: j,
                b_end: block.b_pos,
            });
        }
        i = block.a_pos + block.len;
        j = block.b_pos + block.len;
        if block.len > 0 {
            ops.push(Opcode {
                tag: OpTag::Equal,
                a_start: block.a_pos,
                a_end: i,
                b_start: block.b_pos,
                b_end: j,
            });
        }
    }
    ops
}

/// The ordered, first-occurrence-deduplicated list of character conflicts
/// between two original (unnormalized) strings.
///
/// A `replace` opcode over ranges of unequal length pairs characters up to
/// the shorter side; the excess on the longer side degrades to deletions
/// (from `a`) or insertions (from `b`).
pub fn conflicting_characters(a: &str, b: &str) -> Vec<CharacterEdit> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut seen: HashSet<CharacterEdit> = HashSet::new();
    let mut edits = Vec::new();
    let mut push = |edit: CharacterEdit, edits: &mut Vec<CharacterEdit>| {
        if seen.insert(edit) {
            edits.push(edit);
        }
    };

    for op in opcodes(&a_chars, &b_chars) {
        let a_sub = &a_chars[op.a_start..op.a_end];
        let b_sub = &b_chars[op.b_start..op.b_end];
        match op.tag {
            OpTag::Equal => {}
            OpTag::Replace => {
                let m = a_sub.len().min(b_sub.len());
                for k in 0..m {
                    push(
                        CharacterEdit::Substitute {
                            from: a_sub[k],
                            to: b_sub[k],
                        },
                        &mut edits,
                    );
                }
                for &ch in &a_sub[m..] {
                    push(CharacterEdit::Delete { from: ch }, &mut edits);
                }
                for &ch in &b_sub[m..] {
                    push(CharacterEdit::Insert { to: ch }, &mut edits);
                }
            }
            OpTag::Delete => {
                for &ch in a_sub {
                    push(CharacterEdit::Delete { from: ch }, &mut edits);
                }
            }
            OpTag::Insert => {
                for &ch in b_sub {
                    push(CharacterEdit::Insert { to: ch }, &mut edits);
                }
            }
        }
    }
    edits
}
