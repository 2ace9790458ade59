//! Tree-sitter based extraction

mod extractor;
pub mod languages;

pub use extractor::TreeSitterExtractor;
