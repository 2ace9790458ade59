//! Property-based tests for the similarity core
//!
//! Invariants that should hold for ALL node sequences:
//! - Bounds: every score lies in [0, 1]
//! - Identity: a sequence aligned with itself scores 1.0
//! - Symmetry: structural similarity ignores argument order
//! - Projection: line matches never overlap and respect the minimum block size
//! - Determinism: repeated comparisons are bit-identical

#[path = "../common/mod.rs"]
mod common;

use codesim_engine::features::similarity::domain::{
    align, project, structural_similarity, MatchBlock,
};
use codesim_engine::{compare_sequences, NodeSequence};
use common::*;
use proptest::prelude::*;

// Small alphabet so that repeats and ties are common
fn tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("A".to_string()),
        Just("B".to_string()),
        Just("C".to_string()),
        Just("D".to_string()),
        Just("E".to_string()),
    ]
}

fn tags(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(tag(), 0..max_len)
}

// Lines include the <= 0 "unknown" sentinel
fn node_sequence(max_len: usize) -> impl Strategy<Value = NodeSequence> {
    tags(max_len).prop_flat_map(|tags| {
        let n = tags.len();
        prop::collection::vec(-1i64..40, n)
            .prop_map(move |lines| NodeSequence::from_parts(tags.clone(), lines).unwrap())
    })
}

proptest! {
    #[test]
    fn prop_ratio_in_unit_interval(a in tags(30), b in tags(30)) {
        let ratio = align(&a, &b).ratio;
        prop_assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn prop_self_alignment_is_one(a in tags(30)) {
        let alignment = align(&a, &a);
        prop_assert_eq!(alignment.ratio, 1.0);
        if !a.is_empty() {
            prop_assert_eq!(alignment.blocks, vec![MatchBlock::new(0, 0, a.len())]);
        }
    }

    #[test]
    fn prop_blocks_are_real_matches(a in tags(30), b in tags(30)) {
        let alignment = align(&a, &b);
        for block in &alignment.blocks {
            prop_assert!(block.len > 0);
            prop_assert_eq!(&a[block.start_a..block.end_a()], &b[block.start_b..block.end_b()]);
        }
        // Sorted and non-overlapping on both sides
        for w in alignment.blocks.windows(2) {
            prop_assert!(w[0].end_a() <= w[1].start_a);
            prop_assert!(w[0].end_b() <= w[1].start_b);
        }
    }

    #[test]
    fn prop_structural_symmetric(a in tags(30), b in tags(30)) {
        let (text_a, text_b) = (a.join(" "), b.join(" "));
        let ab = structural_similarity(&text_a, &text_b);
        let ba = structural_similarity(&text_b, &text_a);
        prop_assert_eq!(ab, ba);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn prop_structural_self_is_one(a in tags(30)) {
        prop_assume!(!a.is_empty());
        let text = a.join(" ");
        prop_assert!((structural_similarity(&text, &text) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_projection_never_overlaps(a in node_sequence(30), b in node_sequence(30), min in 1usize..5) {
        let result = compare_sequences(&a, &b, min);
        assert_no_overlap(&result);
        assert_well_formed(&result);
    }

    #[test]
    fn prop_short_blocks_never_projected(a in node_sequence(30), b in node_sequence(30), min in 2usize..5) {
        let blocks = align(a.tags(), b.tags()).blocks;
        let short: Vec<MatchBlock> = blocks.iter().copied().filter(|blk| blk.len < min).collect();
        prop_assert!(project(&short, a.lines(), b.lines(), min).is_empty());
    }

    #[test]
    fn prop_compare_deterministic(a in node_sequence(25), b in node_sequence(25)) {
        let first = compare_sequences(&a, &b, 3);
        let second = compare_sequences(&a, &b, 3);
        prop_assert_eq!(first.avg_score.to_bits(), second.avg_score.to_bits());
        prop_assert_eq!(first.line_matches, second.line_matches);
    }

    #[test]
    fn prop_avg_is_mean(a in node_sequence(25), b in node_sequence(25)) {
        let result = compare_sequences(&a, &b, 3);
        prop_assert_eq!(result.avg_score, (result.seq_score + result.struct_score) / 2.0);
        prop_assert!((0.0..=1.0).contains(&result.avg_score));
    }
}
