//! Source line ranges
//!
//! Inclusive, 1-based line spans used to report where two submissions match.

use serde::{Deserialize, Serialize};

/// Line value meaning "line unknown"; any value `<= 0` is treated the same way
pub const UNKNOWN_LINE: i64 = 0;

/// Inclusive line range `[start, end]` in a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRange {
    pub start: i64,
    pub end: i64,
}

impl LineRange {
    /// Create a new range; `start` and `end` are swapped if given out of order
    pub fn new(start: i64, end: i64) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Range covering the known (> 0) lines among `lines`
    ///
    /// Returns `None` when every value is the "unknown line" sentinel.
    pub fn from_known_lines(lines: &[i64]) -> Option<Self> {
        let mut known = lines.iter().copied().filter(|&line| line > UNKNOWN_LINE);
        let first = known.next()?;
        let (min, max) = known.fold((first, first), |(lo, hi), line| (lo.min(line), hi.max(line)));
        Some(Self::new(min, max))
    }

    /// Closed-interval overlap test
    pub fn overlaps(&self, other: &LineRange) -> bool {
        !(self.end < other.start || self.start > other.end)
    }

    pub fn contains_line(&self, line: i64) -> bool {
        self.start <= line && line <= self.end
    }

    pub fn line_count(&self) -> i64 {
        self.end - self.start + 1
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
