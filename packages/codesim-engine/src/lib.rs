/*
 * Codesim Engine - Structural Code Similarity
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (LineRange) and error types
 * - config/      : Detector configuration (YAML + env overrides)
 * - features/    : Vertical slices (parsing → similarity)
 * - bin/         : `codesim` CLI
 *
 * The similarity core is pure: no I/O, no shared mutable state.
 * Batch fan-out uses Rayon work-stealing over submission pairs.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parsing, similarity)
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::DetectorConfig;
pub use errors::{CodesimError, Result};
pub use features::parsing::{LanguageId, NodeSequence, TreeExtractor};
pub use features::similarity::{
    compare_sequences, detector_for, detector_for_name, text_similarity, BatchDetector,
    ComparisonResult, DetectionRequest, DetectionResponse, JavaSimilarityDetector, LineRangeMatch,
    PairResult, PythonSimilarityDetector, SimilarityDetector, Submission,
};
pub use shared::models::LineRange;
