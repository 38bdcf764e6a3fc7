//! Reusable UI components
//!
//! Common building blocks for the previewer.

pub mod blocks;
pub mod empty_state;

pub use blocks::*;
pub use empty_state::*;
