//! Batch Detection UseCase
//!
//! All-pairs comparison over a set of submissions. Each submission is
//! extracted once, then every unordered pair `(i, j), i < j` is compared in
//! parallel with Rayon.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use super::detector::{compare_sequences, detector_for, SimilarityDetector};
use crate::config::DetectorConfig;
use crate::errors::{CodesimError, Result};
use crate::features::parsing::{LanguageId, NodeSequence};
use crate::features::similarity::domain::LineRangeMatch;

const DEFAULT_LANGUAGE: &str = "java";

/// One source file to compare
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Caller-chosen identifier; JSON numbers are accepted and stringified
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub file_content: String,
}

impl Submission {
    pub fn new(id: impl Into<String>, file_content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_content: file_content.into(),
        }
    }
}

/// Batch request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionRequest {
    pub submissions: Vec<Submission>,

    /// Language name, `"java"` when omitted
    #[serde(default = "default_language")]
    pub language: String,

    /// Overrides the configured reporting threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl DetectionRequest {
    pub fn new(submissions: Vec<Submission>, language: LanguageId) -> Self {
        Self {
            submissions,
            language: language.name().to_string(),
            threshold: None,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// One reported pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairResult {
    pub submission_a_id: String,
    pub submission_b_id: String,
    /// `avg_score` rounded to 4 decimal places
    pub similarity_score: f64,
    pub seq_score: f64,
    pub struct_score: f64,
    pub line_matches: Vec<LineRangeMatch>,
}

/// Batch response, sorted by `similarity_score` descending
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    pub results: Vec<PairResult>,
}

/// All-pairs detector
#[derive(Debug, Clone, Default)]
pub struct BatchDetector {
    config: DetectorConfig,
}

impl BatchDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Compare every unordered pair of submissions
    ///
    /// Pairs whose `avg_score` is strictly above the threshold are kept.
    /// Ties in score keep ascending `(i, j)` order.
    pub fn detect(&self, request: &DetectionRequest) -> Result<DetectionResponse> {
        let start = Instant::now();

        let language = LanguageId::from_name(&request.language)?;
        let threshold = request.threshold.unwrap_or(self.config.similarity_threshold);
        if !(0.0..=1.0).contains(&threshold) {
            return Err(CodesimError::invalid_input(format!(
                "threshold must be within 0.0..=1.0, got {}",
                threshold
            )));
        }

        let detector = detector_for(language, self.config);
        let submissions = &request.submissions;

        let sequences: Vec<NodeSequence> = submissions
            .par_iter()
            .map(|submission| detector.extract(&submission.file_content))
            .collect();

        let n = submissions.len();
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();
        let total_pairs = pairs.len();

        // par_iter().filter_map().collect() preserves (i, j) order
        let mut results: Vec<PairResult> = pairs
            .into_par_iter()
            .filter_map(|(i, j)| {
                let result =
                    compare_sequences(&sequences[i], &sequences[j], self.config.min_block_size);
                if result.avg_score <= threshold {
                    return None;
                }
                Some(PairResult {
                    submission_a_id: submissions[i].id.clone(),
                    submission_b_id: submissions[j].id.clone(),
                    similarity_score: round4(result.avg_score),
                    seq_score: result.seq_score,
                    struct_score: result.struct_score,
                    line_matches: result.line_matches,
                })
            })
            .collect();

        // Stable sort keeps (i, j) order among equal scores
        results.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));

        tracing::info!(
            language = language.name(),
            submissions = n,
            pairs = total_pairs,
            reported = results.len(),
            threshold,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "batch detection complete"
        );

        Ok(DetectionResponse { results })
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
