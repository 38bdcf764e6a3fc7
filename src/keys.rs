//! Keybinding definitions for the page previewer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

// =============================================================================
// Global keys
// =============================================================================

/// Quit the previewer
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

/// Check if key is Ctrl+C
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

// =============================================================================
// Scrolling keys
// =============================================================================

/// Scroll up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Scroll up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Scroll down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Scroll down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to top
pub const GO_TOP: KeyCode = KeyCode::Char('g');

/// Go to bottom
pub const GO_BOTTOM: KeyCode = KeyCode::Char('G');

/// Scroll one screen up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Scroll one screen down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    matches!(code, MOVE_UP | MOVE_UP_ARROW)
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    matches!(code, MOVE_DOWN | MOVE_DOWN_ARROW)
}

// =============================================================================
// Status bar hints
// =============================================================================

/// A key shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

pub const HINT_QUIT: KeyHint = KeyHint {
    key: "q",
    label: "Quit",
    color: Color::Red,
};
pub const HINT_SCROLL: KeyHint = KeyHint {
    key: "j/k",
    label: "Scroll",
    color: Color::Cyan,
};
pub const HINT_PAGE: KeyHint = KeyHint {
    key: "PgUp/PgDn",
    label: "Page",
    color: Color::Cyan,
};
pub const HINT_TOP_BOTTOM: KeyHint = KeyHint {
    key: "g/G",
    label: "Top/Bottom",
    color: Color::Yellow,
};

/// Hints shown while previewing a page
pub const PREVIEW_HINTS: &[KeyHint] = &[HINT_QUIT, HINT_SCROLL, HINT_PAGE, HINT_TOP_BOTTOM];
