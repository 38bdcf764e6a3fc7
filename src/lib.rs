//! mbview - MusicBrainz view components
//!
//! Renders MusicBrainz pages from resolved data: the label edit diff, the
//! "tracks with sequence issues" report and work search results.
//!
//! This library provides:
//! - [`model`]: Domain models (entities, edits, reports, search results)
//! - [`markup`]: Typed markup tree and HTML serialization
//! - [`diff`]: Text diff and full-change rows
//! - [`components`]: Shared page components (links, tables, pager, layouts)
//! - [`views`]: The three page views
//! - [`page`]: Page documents loaded from JSON
//! - [`app`]: Terminal previewer state and logic
//! - [`ui`]: Terminal drawing

pub mod app;
pub mod cli;
pub mod components;
pub mod diff;
pub mod error;
pub mod format;
pub mod i18n;
pub mod keys;
pub mod logging;
pub mod markup;
pub mod model;
pub mod page;
pub mod ui;
pub mod views;
