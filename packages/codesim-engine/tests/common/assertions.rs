//! Custom assertions for comparison results

use std::collections::BTreeSet;

use codesim_engine::ComparisonResult;

/// No two line matches share a line on the A side or on the B side
pub fn assert_no_overlap(result: &ComparisonResult) {
    let matches = &result.line_matches;
    for (i, x) in matches.iter().enumerate() {
        for y in &matches[i + 1..] {
            assert!(
                !x.a.overlaps(&y.a),
                "A-side overlap: {} and {}",
                x.a,
                y.a
            );
            assert!(
                !x.b.overlaps(&y.b),
                "B-side overlap: {} and {}",
                x.b,
                y.b
            );
        }
    }
}

/// Line matches are sorted by `a.start` and every range is ordered
pub fn assert_well_formed(result: &ComparisonResult) {
    for m in &result.line_matches {
        assert!(m.a_start() <= m.a_end());
        assert!(m.b_start() <= m.b_end());
        assert!(m.a_start() > 0 && m.b_start() > 0);
    }
    assert!(result
        .line_matches
        .windows(2)
        .all(|w| w[0].a_start() <= w[1].a_start()));
}

/// Every line in `expected` lies inside some A-side range
pub fn assert_covers_a(result: &ComparisonResult, expected: &[i64]) {
    let covered: BTreeSet<i64> = expected
        .iter()
        .copied()
        .filter(|&line| result.line_matches.iter().any(|m| m.a.contains_line(line)))
        .collect();
    let wanted: BTreeSet<i64> = expected.iter().copied().collect();
    assert_eq!(covered, wanted, "A-side lines not covered");
}

/// Every line in `expected` lies inside some B-side range
pub fn assert_covers_b(result: &ComparisonResult, expected: &[i64]) {
    let covered: BTreeSet<i64> = expected
        .iter()
        .copied()
        .filter(|&line| result.line_matches.iter().any(|m| m.b.contains_line(line)))
        .collect();
    let wanted: BTreeSet<i64> = expected.iter().copied().collect();
    assert_eq!(covered, wanted, "B-side lines not covered");
}
