//! Configuration I/O (YAML schema)
//!
//! Defines the on-disk schema. Loading and validation live in `detector_config.rs`.

use serde::{Deserialize, Serialize};

use super::DetectorConfig;

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// detector:
///   min_block_size: 3
///   similarity_threshold: 0.5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version; `None` is rejected on load
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Detector settings (defaults apply to omitted fields)
    #[serde(default)]
    pub detector: DetectorConfig,
}
