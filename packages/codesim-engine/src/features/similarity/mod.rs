//! Structural Code Similarity
//!
//! Compares two submissions by the shape of their syntax trees rather than
//! their text, so renamed identifiers and reformatting do not hide copying.
//!
//! Two metrics are combined:
//! - **Sequence alignment**: order-sensitive longest-common-block ratio over
//!   node tags
//! - **Structural vector**: order-insensitive TF-IDF cosine over the same tags
//!
//! Matching blocks of the alignment are projected back to source line ranges.
//!
//! # Hexagonal Architecture
//!
//! ```text
//! External (CLI / library callers)
//!           ↓
//! application/ (SimilarityDetector facade, BatchDetector)
//!           ↓
//! domain/ (alignment, TF-IDF, projection, aggregation)
//!           ↓
//! infrastructure/ (Java / Python detectors)
//! ```
//!
//! # Usage
//!
//! ```
//! use codesim_engine::{PythonSimilarityDetector, SimilarityDetector};
//!
//! let detector = PythonSimilarityDetector::new();
//! let result = detector.compare("def f(a):\n    return a\n", "def g(b):\n    return b\n");
//! assert_eq!(result.seq_score, 1.0);
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer (primary interface)
pub use application::{
    compare_sequences, detector_for, detector_for_name, BatchDetector, DetectionRequest,
    DetectionResponse, PairResult, SimilarityDetector, Submission,
};

// Re-export domain types
pub use domain::{text_similarity, ComparisonResult, LineRangeMatch, MatchBlock};

// Re-export infrastructure
pub use infrastructure::{JavaSimilarityDetector, PythonSimilarityDetector};
