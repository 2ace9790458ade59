//! Configuration system
//!
//! ```text
//! config/
//! ├── detector_config.rs  # DetectorConfig + YAML/env loading
//! ├── error.rs            # ConfigError
//! └── io.rs               # YAML schema v1
//! ```

mod detector_config;
pub mod error;
pub mod io;

pub use detector_config::{
    DetectorConfig, DEFAULT_MIN_BLOCK_SIZE, DEFAULT_SIMILARITY_THRESHOLD, ENV_MIN_BLOCK_SIZE,
    ENV_SIMILARITY_THRESHOLD,
};
pub use error::{ConfigError, ConfigResult};
