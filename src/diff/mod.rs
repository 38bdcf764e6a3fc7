//! Field change rendering
//!
//! Two primitives render an old/new pair as a labeled table row:
//! - [`diff_row`]: text diff, optionally per token
//! - [`full_change_row`]: whole-unit replacement of arbitrary content

mod rows;
mod script;
mod tokens;

pub use rows::{NEW_ONLY_CLASS, OLD_ONLY_CLASS, diff_row, full_change_row};
pub use script::{ChangeKind, EditOp, TextDiff};
pub use tokens::{Token, Tokenized};

/// Which primitive renders a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Text diff, split on the given regex when present
    Diff { split: Option<&'static str> },
    /// Whole-unit replacement
    FullChange,
}

/// Split on runs of whitespace (word-level diff)
pub const SPLIT_WORDS: &str = r"\s+";
/// Split dates into year, month and day
pub const SPLIT_DATE: &str = "-";
/// Split comma-joined lists into elements
pub const SPLIT_LIST: &str = ", ";
