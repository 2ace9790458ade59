//! Batch detection tests
//!
//! JSON request in, JSON response out, the same shape the CLI `batch`
//! subcommand reads and prints.

#[path = "../common/mod.rs"]
mod common;

use codesim_engine::{
    BatchDetector, CodesimError, DetectionRequest, DetectionResponse, DetectorConfig, LanguageId,
    Submission,
};
use common::*;
use pretty_assertions::assert_eq;

fn java_batch() -> Vec<Submission> {
    vec![
        Submission::new("alice", java_sum("Sum", "sum", "values", "total")),
        Submission::new("bob", java_unrelated()),
        Submission::new("carol", java_sum("Adder", "add", "xs", "acc")),
    ]
}

#[test]
fn test_detects_renamed_copy_in_java_batch() {
    let request = DetectionRequest::new(java_batch(), LanguageId::Java);
    let response = BatchDetector::new().detect(&request).unwrap();

    assert!(!response.results.is_empty());
    let top = &response.results[0];
    assert_eq!(
        (top.submission_a_id.as_str(), top.submission_b_id.as_str()),
        ("alice", "carol")
    );
    assert_eq!(top.similarity_score, 1.0);
    assert_eq!(top.seq_score, 1.0);
}

#[test]
fn test_results_sorted_and_above_threshold() {
    let request = DetectionRequest::new(java_batch(), LanguageId::Java).with_threshold(0.0);
    let response = BatchDetector::new().detect(&request).unwrap();

    assert!(response
        .results
        .windows(2)
        .all(|w| w[0].similarity_score >= w[1].similarity_score));
    assert!(response.results.iter().all(|r| r.similarity_score > 0.0));
    assert!(response.results.len() <= 3);
}

#[test]
fn test_pairs_listed_once_in_submission_order() {
    let request = DetectionRequest::new(java_batch(), LanguageId::Java).with_threshold(0.0);
    let response = BatchDetector::new().detect(&request).unwrap();

    let position = |id: &str| java_batch().iter().position(|s| s.id == id).unwrap();
    for result in &response.results {
        assert!(position(&result.submission_a_id) < position(&result.submission_b_id));
    }
}

#[test]
fn test_scores_rounded_to_four_places() {
    let request = DetectionRequest::new(java_batch(), LanguageId::Java).with_threshold(0.0);
    let response = BatchDetector::new().detect(&request).unwrap();

    for result in &response.results {
        let scaled = result.similarity_score * 10_000.0;
        assert!((scaled - scaled.round()).abs() < 1e-6);
    }
}

#[test]
fn test_configured_threshold_used_when_request_has_none() {
    let strict = DetectorConfig::default().with_similarity_threshold(1.0);
    let request = DetectionRequest::new(java_batch(), LanguageId::Java);

    let response = BatchDetector::with_config(strict).detect(&request).unwrap();

    assert!(response.results.is_empty());
}

#[test]
fn test_request_threshold_overrides_config() {
    let strict = DetectorConfig::default().with_similarity_threshold(1.0);
    let request = DetectionRequest::new(java_batch(), LanguageId::Java).with_threshold(0.9);

    let response = BatchDetector::with_config(strict).detect(&request).unwrap();

    assert_eq!(response.results.len(), 1);
}

#[test]
fn test_json_request_round_trip_through_detector() {
    let json = serde_json::json!({
        "language": "python",
        "submissions": [
            { "id": 1, "file_content": python_stats("mean", "variance", "xs") },
            { "id": 2, "file_content": python_stats("avg", "spread", "data") },
            { "id": 3, "file_content": python_unrelated() }
        ]
    });

    let request: DetectionRequest = serde_json::from_value(json).unwrap();
    let response = BatchDetector::new().detect(&request).unwrap();
    let encoded = serde_json::to_value(&response).unwrap();

    let first = &encoded["results"][0];
    assert_eq!(first["submission_a_id"], "1");
    assert_eq!(first["submission_b_id"], "2");
    assert_eq!(first["similarity_score"], 1.0);
    assert!(first["line_matches"].as_array().unwrap().len() >= 1);

    let decoded: DetectionResponse = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, response);
}

#[test]
fn test_language_defaults_to_java() {
    let json = serde_json::json!({
        "submissions": [
            { "id": "a", "file_content": java_sum("Sum", "sum", "values", "total") },
            { "id": "b", "file_content": java_sum("Sum", "sum", "values", "total") }
        ]
    });

    let request: DetectionRequest = serde_json::from_value(json).unwrap();
    assert_eq!(request.language, "java");

    let response = BatchDetector::new().detect(&request).unwrap();
    assert_eq!(response.results.len(), 1);
}

#[test]
fn test_unsupported_language_rejected() {
    let json = serde_json::json!({
        "language": "ruby",
        "submissions": [{ "id": "a", "file_content": "puts 1" }]
    });

    let request: DetectionRequest = serde_json::from_value(json).unwrap();
    let err = BatchDetector::new().detect(&request).unwrap_err();

    assert!(matches!(err, CodesimError::UnsupportedLanguage(ref name) if name == "ruby"));
}

#[test]
fn test_missing_file_content_is_decode_error() {
    let json = r#"{ "submissions": [{ "id": "a" }] }"#;
    let err = serde_json::from_str::<DetectionRequest>(json).unwrap_err();
    let err: CodesimError = err.into();

    assert!(matches!(err, CodesimError::Serialization(_)));
}
