//! Feature modules
//!
//! - `parsing`    : source text → node sequences (tree-sitter)
//! - `similarity` : node sequences → scores and matched line ranges

pub mod parsing;
pub mod similarity;
