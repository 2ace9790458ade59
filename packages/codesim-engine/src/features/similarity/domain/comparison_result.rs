//! Comparison result models

use serde::{Deserialize, Serialize};

use crate::shared::models::LineRange;

/// A matched region expressed as source lines in both documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRangeMatch {
    /// Lines in document A
    pub a: LineRange,
    /// Lines in document B
    pub b: LineRange,
}

impl LineRangeMatch {
    pub fn new(a: LineRange, b: LineRange) -> Self {
        Self { a, b }
    }

    pub fn a_start(&self) -> i64 {
        self.a.start
    }

    pub fn a_end(&self) -> i64 {
        self.a.end
    }

    pub fn b_start(&self) -> i64 {
        self.b.start
    }

    pub fn b_end(&self) -> i64 {
        self.b.end
    }

    /// True if the two matches share a line on either side
    pub fn conflicts_with(&self, other: &LineRangeMatch) -> bool {
        self.a.overlaps(&other.a) || self.b.overlaps(&other.b)
    }
}

/// Outcome of comparing one pair of submissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Order-sensitive alignment score, averaged over both directions
    pub seq_score: f64,
    /// Order-insensitive TF-IDF score, averaged over both directions
    pub struct_score: f64,
    /// Mean of `seq_score` and `struct_score`
    pub avg_score: f64,
    /// Non-overlapping matched regions, sorted by `a.start`
    pub line_matches: Vec<LineRangeMatch>,
}

impl ComparisonResult {
    /// Result for two inputs with nothing in common
    pub fn empty() -> Self {
        Self {
            seq_score: 0.0,
            struct_score: 0.0,
            avg_score: 0.0,
            line_matches: Vec::new(),
        }
    }

    /// Total lines covered by matches in document A
    pub fn matched_lines_a(&self) -> i64 {
        self.line_matches.iter().map(|m| m.a.line_count()).sum()
    }

    /// Total lines covered by matches in document B
    pub fn matched_lines_b(&self) -> i64 {
        self.line_matches.iter().map(|m| m.b.line_count()).sum()
    }
}
