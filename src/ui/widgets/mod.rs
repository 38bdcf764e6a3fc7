//! Widgets drawn around the page content

mod status_bar;

pub use status_bar::{build_status_bar, render_status_bar};
