//! Structural Vector Engine
//!
//! Order-insensitive similarity of two documents of whitespace-separated
//! terms (joined node tags). Each document becomes a TF-IDF vector over the
//! vocabulary of this document pair only:
//!
//! - tf(t, d) = raw count of `t` in `d`
//! - idf(t)   = ln((1 + n) / (1 + df(t))) + 1, with n = 2 documents
//! - vectors are L2-normalized; similarity is their dot product
//!
//! The vocabulary is walked in sorted order, so the floating-point summation
//! order does not depend on argument order and the result is exactly symmetric.

use std::collections::{BTreeMap, BTreeSet};

/// Number of documents in the per-call corpus
const CORPUS_SIZE: f64 = 2.0;

/// TF-IDF cosine similarity of two term documents, in `[0, 1]`
///
/// Returns 0.0 when either document has no terms.
pub fn structural_similarity(text_a: &str, text_b: &str) -> f64 {
    let tf_a = term_frequencies(text_a);
    let tf_b = term_frequencies(text_b);

    if tf_a.is_empty() || tf_b.is_empty() {
        return 0.0;
    }

    let vocabulary: BTreeSet<&str> = tf_a.keys().chain(tf_b.keys()).copied().collect();

    let weights_a = tfidf_weights(&vocabulary, &tf_a, &tf_b);
    let weights_b = tfidf_weights(&vocabulary, &tf_b, &tf_a);

    let norm_a = l2_norm(&weights_a);
    let norm_b = l2_norm(&weights_b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = weights_a
        .iter()
        .zip(weights_b.iter())
        .map(|(wa, wb)| (wa / norm_a) * (wb / norm_b))
        .sum();

    dot.clamp(0.0, 1.0)
}

/// Smoothed inverse document frequency over the two-document corpus
pub fn smoothed_idf(document_frequency: usize) -> f64 {
    ((1.0 + CORPUS_SIZE) / (1.0 + document_frequency as f64)).ln() + 1.0
}

fn term_frequencies(text: &str) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for term in text.split_whitespace() {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// tf·idf weights of `own` in vocabulary order
fn tfidf_weights(
    vocabulary: &BTreeSet<&str>,
    own: &BTreeMap<&str, usize>,
    other: &BTreeMap<&str, usize>,
) -> Vec<f64> {
    vocabulary
        .iter()
        .map(|term| {
            let tf = own.get(term).copied().unwrap_or(0);
            if tf == 0 {
                return 0.0;
            }
            let df = 1 + usize::from(other.contains_key(term));
            tf as f64 * smoothed_idf(df)
        })
        .collect()
}

fn l2_norm(weights: &[f64]) -> f64 {
    weights.iter().map(|w| w * w).sum::<f64>().sqrt()
}
