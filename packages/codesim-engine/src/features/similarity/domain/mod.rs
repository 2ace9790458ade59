//! Similarity Domain
//!
//! Pure comparison core: no I/O, no shared mutable state. Every function here
//! is safe to call concurrently from any number of threads.
//!
//! # Architecture
//!
//! ```text
//! domain/
//! ├── match_block.rs        # (start_a, start_b, len) triples
//! ├── sequence_alignment.rs # Longest-common-block matching + ratio
//! ├── structural_vector.rs  # Per-pair TF-IDF cosine
//! ├── match_projector.rs    # Blocks → non-overlapping line ranges
//! ├── score_aggregator.rs   # Two-direction averaging
//! └── comparison_result.rs  # LineRangeMatch, ComparisonResult
//! ```

pub mod comparison_result;
pub mod match_block;
pub mod match_projector;
pub mod score_aggregator;
pub mod sequence_alignment;
pub mod structural_vector;

// Re-exports for convenience
pub use comparison_result::{ComparisonResult, LineRangeMatch};
pub use match_block::MatchBlock;
pub use match_projector::project;
pub use score_aggregator::{aggregate, sequence_score, structural_score, SequenceScore};
pub use sequence_alignment::{align, text_similarity, SequenceAligner, SequenceAlignment};
pub use structural_vector::{smoothed_idf, structural_similarity};
