//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for rendered page markup
pub mod markup_view {
    use super::*;

    /// Text only present on the old side of a change
    pub const REMOVED: Color = Color::Red;
    /// Text only present on the new side of a change
    pub const ADDED: Color = Color::Green;
    /// Entity and navigation links
    pub const LINK: Color = Color::Cyan;
    /// Page headings
    pub const HEADING: Color = Color::Yellow;
    /// Disambiguation comments and disabled items
    pub const MUTED: Color = Color::DarkGray;
    /// Codes (ISWC, ...)
    pub const CODE: Color = Color::Magenta;
    /// Table cell separators
    pub const RULE: Color = Color::DarkGray;
}

/// Colors for the previewer chrome
pub mod preview {
    use super::*;

    /// Title in the header block
    pub const TITLE: Color = Color::Cyan;
    /// Scroll position indicator
    pub const POSITION: Color = Color::DarkGray;
}
