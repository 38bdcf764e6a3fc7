//! UI symbols used when drawing markup as text
//!
//! Unicode box drawing is used, matching the border style of ratatui blocks.

/// Separator between table cells
pub const CELL_SEPARATOR: &str = " │ ";

/// Prefix of list items rendered as lines
pub const BULLET: &str = "• ";

/// Separator of list items inside a table cell
pub const INLINE_LIST_SEPARATOR: &str = ", ";

/// Separator of pagination items
pub const NAV_SEPARATOR: &str = "  ";
