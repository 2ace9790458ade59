//! Matching blocks between two sequences

use serde::{Deserialize, Serialize};

/// A maximal contiguous run shared by two sequences
///
/// `a[start_a..start_a + len] == b[start_b..start_b + len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchBlock {
    pub start_a: usize,
    pub start_b: usize,
    pub len: usize,
}

impl MatchBlock {
    pub fn new(start_a: usize, start_b: usize, len: usize) -> Self {
        Self {
            start_a,
            start_b,
            len,
        }
    }

    /// Exclusive end index in sequence A
    pub fn end_a(&self) -> usize {
        self.start_a + self.len
    }

    /// Exclusive end index in sequence B
    pub fn end_b(&self) -> usize {
        self.start_b + self.len
    }

    /// True when `next` starts exactly where this block ends on both sides
    pub fn is_continued_by(&self, next: &MatchBlock) -> bool {
        self.end_a() == next.start_a && self.end_b() == next.start_b
    }
}
