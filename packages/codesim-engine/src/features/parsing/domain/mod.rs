//! Parsing domain models

mod node_sequence;

pub use node_sequence::{NodeSequence, UNKNOWN_LINE};
