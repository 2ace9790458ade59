//! Match Projector
//!
//! Maps alignment blocks (node indices) back to source line ranges and drops
//! matches that would report the same lines twice.
//!
//! Overlap resolution is greedy first-wins in ascending `start_a` order. It is
//! deterministic but does not maximize total coverage.

use super::{LineRangeMatch, MatchBlock};
use crate::shared::models::LineRange;

/// Project blocks onto line ranges
///
/// 1. blocks shorter than `min_block_size` are dropped
/// 2. each side's range is `(min, max)` of its known (> 0) lines; a block with
///    no known line on either side is dropped
/// 3. a candidate is accepted only if it overlaps no accepted match on the A
///    side nor on the B side
pub fn project(
    blocks: &[MatchBlock],
    lines_a: &[i64],
    lines_b: &[i64],
    min_block_size: usize,
) -> Vec<LineRangeMatch> {
    let mut ordered: Vec<&MatchBlock> = blocks
        .iter()
        .filter(|block| block.len >= min_block_size)
        .collect();
    ordered.sort_by_key(|block| (block.start_a, block.start_b));

    let mut accepted: Vec<LineRangeMatch> = Vec::new();

    for block in ordered {
        let Some(candidate) = project_block(block, lines_a, lines_b) else {
            continue;
        };

        if accepted.iter().any(|m| m.conflicts_with(&candidate)) {
            continue;
        }
        accepted.push(candidate);
    }

    accepted.sort_by_key(|m| m.a.start);
    accepted
}

fn project_block(block: &MatchBlock, lines_a: &[i64], lines_b: &[i64]) -> Option<LineRangeMatch> {
    let span_a = lines_a.get(block.start_a..block.end_a())?;
    let span_b = lines_b.get(block.start_b..block.end_b())?;

    let a = LineRange::from_known_lines(span_a)?;
    let b = LineRange::from_known_lines(span_b)?;
    Some(LineRangeMatch::new(a, b))
}
