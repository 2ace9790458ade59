//! Error types for codesim-engine
//!
//! Provides unified error handling across the crate. The similarity core
//! itself is infallible; errors only arise at its boundaries (language
//! selection, configuration, request decoding, paired-sequence construction).

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for codesim operations
#[derive(Debug, Error)]
pub enum CodesimError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// No tree extractor exists for the requested language
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Caller supplied structurally invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON encoding/decoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CodesimError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        CodesimError::Parse(msg.into())
    }

    /// Create an unsupported-language error
    pub fn unsupported_language(name: impl Into<String>) -> Self {
        CodesimError::UnsupportedLanguage(name.into())
    }

    /// Create an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CodesimError::InvalidInput(msg.into())
    }
}

/// Result type alias for codesim operations
pub type Result<T> = std::result::Result<T, CodesimError>;
