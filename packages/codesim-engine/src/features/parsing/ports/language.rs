//! Supported languages

use serde::{Deserialize, Serialize};

use crate::errors::{CodesimError, Result};

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Java,
    Python,
}

impl LanguageId {
    /// All supported languages
    pub const ALL: [LanguageId; 2] = [LanguageId::Java, LanguageId::Python];

    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Java => "java",
            LanguageId::Python => "python",
        }
    }

    /// Resolve a language by name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "java" => Ok(LanguageId::Java),
            "python" | "py" => Ok(LanguageId::Python),
            _ => Err(CodesimError::unsupported_language(name)),
        }
    }

    /// Get language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Java => &["java"],
            LanguageId::Python => &["py", "pyi"],
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
