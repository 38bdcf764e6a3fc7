//! Page views
//!
//! Each view is a pure function from resolved page data to a markup tree.

mod edit_label;
mod tracks_with_sequence_issues;
mod work_results;

pub use edit_label::edit_label;
pub use tracks_with_sequence_issues::{
    DESCRIPTION as TRACKS_WITH_SEQUENCE_ISSUES_DESCRIPTION,
    TITLE as TRACKS_WITH_SEQUENCE_ISSUES_TITLE, tracks_with_sequence_issues,
};
pub use work_results::{create_work_href, work_results};
