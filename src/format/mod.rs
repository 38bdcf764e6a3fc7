//! Formatter utilities
//!
//! Pure conversions from domain values to display strings.

mod date;
mod text;

pub use date::{format_date, format_timestamp};
pub use text::{comma_only_list_text, encode_uri_component, loop_parity, yes_no};
