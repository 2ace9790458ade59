//! Shared models

mod line_range;

pub use line_range::{LineRange, UNKNOWN_LINE};
