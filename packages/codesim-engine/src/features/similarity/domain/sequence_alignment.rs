//! Sequence Alignment Engine
//!
//! Ratcliff/Obershelp style matching over arbitrary element sequences:
//! repeatedly take the longest common contiguous block, then solve the
//! regions to its left and right. The recursion runs on an explicit stack of
//! `(a_lo, a_hi, b_lo, b_hi)` ranges so deep inputs cannot overflow.
//!
//! Used on node tags for structural comparison and on characters for raw
//! text comparison.

use std::collections::HashMap;
use std::hash::Hash;

use super::MatchBlock;

/// Result of aligning two sequences
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceAlignment {
    /// `2 * M / (len(a) + len(b))`, `M` = total matched elements
    pub ratio: f64,
    /// Matching blocks sorted by `(start_a, start_b)`
    pub blocks: Vec<MatchBlock>,
}

/// Aligner over two borrowed sequences
///
/// Holds the position index of `b` so repeated longest-match queries on
/// sub-ranges do not rescan it.
pub struct SequenceAligner<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// element → ascending positions in `b`
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T> SequenceAligner<'a, T>
where
    T: Eq + Hash,
{
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, elem) in b.iter().enumerate() {
            b2j.entry(elem).or_default().push(j);
        }
        Self { a, b, b2j }
    }

    /// Longest common block of `a[a_lo..a_hi]` and `b[b_lo..b_hi]`
    ///
    /// Among equally long blocks, the one starting earliest in `a` wins, then
    /// the one starting earliest in `b`. Returns a zero-length block at
    /// `(a_lo, b_lo)` when nothing matches.
    pub fn find_longest_match(
        &self,
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> MatchBlock {
        let mut best_i = a_lo;
        let mut best_j = b_lo;
        let mut best_size = 0;

        // j2len[j] = length of the match ending at a[i - 1], b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in a_lo..a_hi {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();

            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }

                    let prev_len = if j > 0 {
                        j2len.get(&(j - 1)).copied().unwrap_or(0)
                    } else {
                        0
                    };
                    let k = prev_len + 1;
                    new_j2len.insert(j, k);

                    // strict '>' keeps the earliest (i, j) among ties
                    if k > best_size {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_size = k;
                    }
                }
            }
            j2len = new_j2len;
        }

        MatchBlock::new(best_i, best_j, best_size)
    }

    /// All matching blocks, sorted by `(start_a, start_b)`
    ///
    /// Blocks that continue each other exactly are collapsed into one.
    pub fn matching_blocks(&self) -> Vec<MatchBlock> {
        if self.a.is_empty() || self.b.is_empty() {
            return Vec::new();
        }

        let mut queue: Vec<(usize, usize, usize, usize)> =
            vec![(0, self.a.len(), 0, self.b.len())];
        let mut found: Vec<MatchBlock> = Vec::new();

        while let Some((a_lo, a_hi, b_lo, b_hi)) = queue.pop() {
            let block = self.find_longest_match(a_lo, a_hi, b_lo, b_hi);
            if block.len == 0 {
                continue;
            }

            found.push(block);

            if a_lo < block.start_a && b_lo < block.start_b {
                queue.push((a_lo, block.start_a, b_lo, block.start_b));
            }
            if block.end_a() < a_hi && block.end_b() < b_hi {
                queue.push((block.end_a(), a_hi, block.end_b(), b_hi));
            }
        }

        found.sort();
        collapse_adjacent(found)
    }

    /// Similarity ratio in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        let matched: usize = self.matching_blocks().iter().map(|b| b.len).sum();
        ratio_from_matches(matched, self.a.len(), self.b.len())
    }

    /// Ratio and blocks in one pass
    pub fn align(&self) -> SequenceAlignment {
        let blocks = self.matching_blocks();
        let matched: usize = blocks.iter().map(|b| b.len).sum();
        SequenceAlignment {
            ratio: ratio_from_matches(matched, self.a.len(), self.b.len()),
            blocks,
        }
    }
}

/// Align `a` against `b`
pub fn align<T>(a: &[T], b: &[T]) -> SequenceAlignment
where
    T: Eq + Hash,
{
    SequenceAligner::new(a, b).align()
}

/// Character-level similarity of two raw texts (single direction)
pub fn text_similarity(text_a: &str, text_b: &str) -> f64 {
    let a: Vec<char> = text_a.chars().collect();
    let b: Vec<char> = text_b.chars().collect();
    SequenceAligner::new(&a, &b).ratio()
}

fn ratio_from_matches(matched: usize, len_a: usize, len_b: usize) -> f64 {
    let total = len_a + len_b;
    if total == 0 {
        return 1.0; // Both empty = identical
    }
    2.0 * matched as f64 / total as f64
}

fn collapse_adjacent(sorted: Vec<MatchBlock>) -> Vec<MatchBlock> {
    let mut collapsed: Vec<MatchBlock> = Vec::with_capacity(sorted.len());
    for block in sorted {
        match collapsed.last_mut() {
            Some(last) if last.is_continued_by(&block) => last.len += block.len,
            _ => collapsed.push(block),
        }
    }
    collapsed
}
