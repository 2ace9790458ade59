//! Parsing Feature
//!
//! Turns raw source text into a [`NodeSequence`]: syntax-node kinds in
//! pre-order with their start lines.
//!
//! ## Structure
//! - `domain/` - NodeSequence
//! - `ports/` - TreeExtractor trait, LanguageId
//! - `infrastructure/` - tree-sitter backed extractor and grammars

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{NodeSequence, UNKNOWN_LINE};
pub use infrastructure::TreeSitterExtractor;
pub use ports::{LanguageId, TreeExtractor};
