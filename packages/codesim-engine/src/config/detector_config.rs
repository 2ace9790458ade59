//! Detector Configuration
//!
//! Read-only settings shared by every comparison: the minimum reportable
//! match-block size and the default batch reporting threshold.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, SUPPORTED_VERSIONS};

/// Environment variable overriding `min_block_size`
pub const ENV_MIN_BLOCK_SIZE: &str = "CODESIM_MIN_BLOCK_SIZE";
/// Environment variable overriding `similarity_threshold`
pub const ENV_SIMILARITY_THRESHOLD: &str = "CODESIM_SIMILARITY_THRESHOLD";

/// Default minimum length of a reportable match block
pub const DEFAULT_MIN_BLOCK_SIZE: usize = 3;
/// Default batch threshold on `avg_score`
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

const MAX_MIN_BLOCK_SIZE: usize = 10_000;

/// Similarity detector configuration
///
/// # Example
/// ```
/// use codesim_engine::config::DetectorConfig;
///
/// let config = DetectorConfig::default();
/// assert_eq!(config.min_block_size, 3);
///
/// let strict = DetectorConfig::new(5, 0.8).unwrap();
/// assert_eq!(strict.similarity_threshold, 0.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    /// Match blocks shorter than this many nodes are never projected to lines
    pub min_block_size: usize,

    /// Batch pairs are reported only when `avg_score` exceeds this (0.0..=1.0)
    pub similarity_threshold: f64,
}

impl DetectorConfig {
    /// Create and validate a configuration
    pub fn new(min_block_size: usize, similarity_threshold: f64) -> ConfigResult<Self> {
        let config = Self {
            min_block_size,
            similarity_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_min_block_size(mut self, min_block_size: usize) -> Self {
        self.min_block_size = min_block_size;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_block_size < 1 || self.min_block_size > MAX_MIN_BLOCK_SIZE {
            return Err(ConfigError::range_with_hint(
                "min_block_size",
                self.min_block_size,
                1,
                MAX_MIN_BLOCK_SIZE,
                "A match block needs at least one node",
            ));
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::range_with_hint(
                "similarity_threshold",
                self.similarity_threshold,
                0.0,
                1.0,
                "Scores are normalized to [0, 1]",
            ));
        }

        Ok(())
    }

    /// Parse a YAML document (schema v1)
    pub fn from_yaml(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        export.detector.validate()?;
        Ok(export.detector)
    }

    /// Load a YAML configuration file
    pub fn from_yaml_file(path: impl AsRef<std::path::Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Export as YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            detector: *self,
        };
        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Apply `CODESIM_*` environment overrides from the process environment
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_MIN_BLOCK_SIZE) {
            self.min_block_size = raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                var: ENV_MIN_BLOCK_SIZE.to_string(),
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(ENV_SIMILARITY_THRESHOLD) {
            self.similarity_threshold =
                raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                    var: ENV_SIMILARITY_THRESHOLD.to_string(),
                    value: raw.clone(),
                })?;
        }

        self.validate()?;
        Ok(self)
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_block_size: DEFAULT_MIN_BLOCK_SIZE,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}
