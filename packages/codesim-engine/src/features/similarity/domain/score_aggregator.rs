//! Score Aggregator
//!
//! Runs both engines in both argument orders and combines the averaged scores.

use super::sequence_alignment::align;
use super::structural_vector::structural_similarity;
use super::MatchBlock;

/// Alignment score averaged over both directions
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceScore {
    /// Mean of `ratio(a, b)` and `ratio(b, a)`
    pub score: f64,
    /// Blocks of the `(a, b)` direction only; used for line projection
    pub blocks: Vec<MatchBlock>,
}

/// Align tags in both directions and average the ratios
pub fn sequence_score(tags_a: &[String], tags_b: &[String]) -> SequenceScore {
    let forward = align(tags_a, tags_b);
    let backward = align(tags_b, tags_a);

    SequenceScore {
        score: mean(forward.ratio, backward.ratio),
        blocks: forward.blocks,
    }
}

/// TF-IDF cosine in both directions, averaged
pub fn structural_score(text_a: &str, text_b: &str) -> f64 {
    mean(
        structural_similarity(text_a, text_b),
        structural_similarity(text_b, text_a),
    )
}

/// Unweighted mean of the sequence and structural scores
pub fn aggregate(seq_score: f64, struct_score: f64) -> f64 {
    mean(seq_score, struct_score)
}

#[inline]
fn mean(x: f64, y: f64) -> f64 {
    (x + y) / 2.0
}
