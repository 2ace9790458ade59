//! Similarity Application Layer (UseCase)
//!
//! Detector facade for single comparisons and the all-pairs batch usecase.

mod batch;
mod detector;

pub use batch::{BatchDetector, DetectionRequest, DetectionResponse, PairResult, Submission};
pub use detector::{compare_sequences, detector_for, detector_for_name, SimilarityDetector};
