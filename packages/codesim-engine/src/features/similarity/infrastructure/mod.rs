//! Similarity Infrastructure
//!
//! Concrete detectors, one per supported language. Adding a language means
//! adding a `TreeExtractor` and a detector here.

mod language_detectors;

pub use language_detectors::{JavaSimilarityDetector, PythonSimilarityDetector};
