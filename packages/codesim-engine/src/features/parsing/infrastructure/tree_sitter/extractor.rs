//! Tree-sitter extractor implementation
//!
//! This is where the tree-sitter dependency lives.

use tree_sitter::{Parser as TSParser, Tree};

use super::languages;
use crate::features::parsing::domain::NodeSequence;
use crate::features::parsing::ports::{LanguageId, TreeExtractor};

/// Tree-sitter based node sequence extractor
///
/// Emits every named, non-extra node (punctuation and comments are skipped)
/// in pre-order, tagged with its node kind and 1-based start line. Pre-order
/// keeps the line array non-decreasing.
#[derive(Debug, Clone, Copy)]
pub struct TreeSitterExtractor {
    language: LanguageId,
}

impl TreeSitterExtractor {
    pub fn new(language: LanguageId) -> Self {
        Self { language }
    }

    /// Create a Java extractor
    pub fn java() -> Self {
        Self::new(LanguageId::Java)
    }

    /// Create a Python extractor
    pub fn python() -> Self {
        Self::new(LanguageId::Python)
    }

    fn parse(&self, source: &str) -> Option<Tree> {
        let mut parser = TSParser::new();
        if let Err(e) = parser.set_language(&languages::grammar(self.language)) {
            tracing::warn!("Failed to set {} grammar: {}", self.language, e);
            return None;
        }

        let tree = parser.parse(source, None)?;
        if tree.root_node().has_error() {
            tracing::debug!(
                language = self.language.name(),
                "source contains syntax errors, treating as empty"
            );
            return None;
        }
        Some(tree)
    }

    /// Pre-order walk with an explicit cursor (no recursion)
    fn collect(tree: &Tree) -> NodeSequence {
        let mut sequence = NodeSequence::new();
        let mut cursor = tree.walk();

        loop {
            let node = cursor.node();
            if node.is_named() && !node.is_extra() {
                sequence.push(node.kind(), node.start_position().row as i64 + 1);
            }

            if cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return sequence;
                }
            }
        }
    }
}

impl TreeExtractor for TreeSitterExtractor {
    fn language(&self) -> LanguageId {
        self.language
    }

    fn extract(&self, source: &str) -> NodeSequence {
        match self.parse(source) {
            Some(tree) => Self::collect(&tree),
            None => NodeSequence::new(),
        }
    }
}
