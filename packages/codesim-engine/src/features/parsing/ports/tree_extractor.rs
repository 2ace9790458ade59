//! Tree extractor port (interface)
//!
//! Defines the contract for turning source text into a node sequence.
//! Each language plugs in through its own implementation.

use super::LanguageId;
use crate::features::parsing::domain::NodeSequence;

/// Source text → node sequence, for one language
///
/// Implementations must be pure and thread-safe: every call stands alone.
/// Parse failures never surface as errors; an unparseable input yields an
/// empty sequence.
pub trait TreeExtractor: Send + Sync {
    /// Language handled by this extractor
    fn language(&self) -> LanguageId;

    /// Extract node tags in traversal order with their best-known source lines
    fn extract(&self, source: &str) -> NodeSequence;
}
