//! Node sequence representation
//!
//! The sole input of the similarity core: syntax-node tags in traversal order
//! with a parallel array of best-known source lines.

use crate::errors::{CodesimError, Result};

pub use crate::shared::models::UNKNOWN_LINE;

/// Ordered syntax-node tags with their source lines
///
/// Invariant: `tags.len() == lines.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSequence {
    tags: Vec<String>,
    lines: Vec<i64>,
}

impl NodeSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tags: Vec::with_capacity(capacity),
            lines: Vec::with_capacity(capacity),
        }
    }

    /// Build from parallel arrays, rejecting mismatched lengths
    pub fn from_parts(tags: Vec<String>, lines: Vec<i64>) -> Result<Self> {
        if tags.len() != lines.len() {
            return Err(CodesimError::invalid_input(format!(
                "node sequence has {} tags but {} line numbers",
                tags.len(),
                lines.len()
            )));
        }
        Ok(Self { tags, lines })
    }

    /// Append one node
    pub fn push(&mut self, tag: impl Into<String>, line: i64) {
        self.tags.push(tag.into());
        self.lines.push(line);
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn lines(&self) -> &[i64] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags joined by single spaces (input of the structural vector engine)
    pub fn joined_tags(&self) -> String {
        self.tags.join(" ")
    }

    /// Iterate `(tag, line)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.tags
            .iter()
            .map(String::as_str)
            .zip(self.lines.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<i64>) {
        (self.tags, self.lines)
    }
}
