//! Parsing ports (interfaces)

mod language;
mod tree_extractor;

pub use language::LanguageId;
pub use tree_extractor::TreeExtractor;
