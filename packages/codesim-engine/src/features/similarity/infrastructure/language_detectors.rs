//! Per-language detectors backed by tree-sitter

use crate::config::DetectorConfig;
use crate::features::parsing::{LanguageId, TreeExtractor, TreeSitterExtractor};
use crate::features::similarity::application::SimilarityDetector;

/// Java similarity detector
#[derive(Debug, Clone)]
pub struct JavaSimilarityDetector {
    extractor: TreeSitterExtractor,
    config: DetectorConfig,
}

impl JavaSimilarityDetector {
    /// Create detector with default configuration
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    /// Create detector with custom configuration
    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            extractor: TreeSitterExtractor::java(),
            config,
        }
    }
}

impl Default for JavaSimilarityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityDetector for JavaSimilarityDetector {
    fn language(&self) -> LanguageId {
        LanguageId::Java
    }

    fn config(&self) -> &DetectorConfig {
        &self.config
    }

    fn extractor(&self) -> &dyn TreeExtractor {
        &self.extractor
    }
}

/// Python similarity detector
#[derive(Debug, Clone)]
pub struct PythonSimilarityDetector {
    extractor: TreeSitterExtractor,
    config: DetectorConfig,
}

impl PythonSimilarityDetector {
    /// Create detector with default configuration
    pub fn new() -> Self {
        Self::with_config(DetectorConfig::default())
    }

    /// Create detector with custom configuration
    pub fn with_config(config: DetectorConfig) -> Self {
        Self {
            extractor: TreeSitterExtractor::python(),
            config,
        }
    }
}

impl Default for PythonSimilarityDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityDetector for PythonSimilarityDetector {
    fn language(&self) -> LanguageId {
        LanguageId::Python
    }

    fn config(&self) -> &DetectorConfig {
        &self.config
    }

    fn extractor(&self) -> &dyn TreeExtractor {
        &self.extractor
    }
}
