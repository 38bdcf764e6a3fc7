//! UI layer
//!
//! Terminal drawing of rendered pages: markup conversion, theme, symbols,
//! components and widgets.

pub mod components;
pub mod markup;
pub mod symbols;
pub mod theme;
pub mod widgets;
