//! Detector Facade
//!
//! One entry point per language: extract both inputs, run the similarity
//! core, return a [`ComparisonResult`].

use crate::config::DetectorConfig;
use crate::errors::Result;
use crate::features::parsing::{LanguageId, NodeSequence, TreeExtractor};
use crate::features::similarity::domain::{
    aggregate, project, sequence_score, structural_score, ComparisonResult,
};
use crate::features::similarity::infrastructure::{
    JavaSimilarityDetector, PythonSimilarityDetector,
};

/// Compare two already extracted node sequences
///
/// Alignment and structural scores are each averaged over both argument
/// orders. Line matches come from the `(a, b)` alignment only.
pub fn compare_sequences(
    a: &NodeSequence,
    b: &NodeSequence,
    min_block_size: usize,
) -> ComparisonResult {
    let seq = sequence_score(a.tags(), b.tags());
    let struct_score = structural_score(&a.joined_tags(), &b.joined_tags());
    let line_matches = project(&seq.blocks, a.lines(), b.lines(), min_block_size);
    let avg_score = aggregate(seq.score, struct_score);

    tracing::debug!(
        nodes_a = a.len(),
        nodes_b = b.len(),
        blocks = seq.blocks.len(),
        line_matches = line_matches.len(),
        seq_score = seq.score,
        struct_score,
        avg_score,
        "compared node sequences"
    );

    ComparisonResult {
        seq_score: seq.score,
        struct_score,
        avg_score,
        line_matches,
    }
}

/// Language-specific similarity detector
///
/// Implementors only provide extraction; `compare` is shared.
pub trait SimilarityDetector: Send + Sync {
    /// Language handled by this detector
    fn language(&self) -> LanguageId;

    /// Read-only configuration
    fn config(&self) -> &DetectorConfig;

    /// Extractor turning source text into a node sequence
    fn extractor(&self) -> &dyn TreeExtractor;

    /// Extract a single source (empty sequence on parse failure)
    fn extract(&self, code: &str) -> NodeSequence {
        self.extractor().extract(code)
    }

    /// Compare two sources
    fn compare(&self, code_a: &str, code_b: &str) -> ComparisonResult {
        let a = self.extract(code_a);
        let b = self.extract(code_b);
        compare_sequences(&a, &b, self.config().min_block_size)
    }
}

/// Detector for `language` with the given configuration
pub fn detector_for(language: LanguageId, config: DetectorConfig) -> Box<dyn SimilarityDetector> {
    match language {
        LanguageId::Java => Box::new(JavaSimilarityDetector::with_config(config)),
        LanguageId::Python => Box::new(PythonSimilarityDetector::with_config(config)),
    }
}

/// Detector for a language given by name (`"java"`, `"python"`, `"py"`)
pub fn detector_for_name(name: &str, config: DetectorConfig) -> Result<Box<dyn SimilarityDetector>> {
    let language = LanguageId::from_name(name)?;
    Ok(detector_for(language, config))
}
