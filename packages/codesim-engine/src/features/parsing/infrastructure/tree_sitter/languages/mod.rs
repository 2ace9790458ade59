//! Language-specific tree-sitter grammars

pub mod java;
pub mod python;

use crate::features::parsing::ports::LanguageId;

/// Grammar for a supported language
pub fn grammar(language: LanguageId) -> tree_sitter::Language {
    match language {
        LanguageId::Java => java::language(),
        LanguageId::Python => python::language(),
    }
}
