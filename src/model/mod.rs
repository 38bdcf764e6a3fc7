//! Data models for mbview
//!
//! Request-scoped, already-resolved data handed to the views. Nothing here
//! fetches or validates; it only describes what gets rendered.

mod change;
mod date;
mod edit;
mod entity;
mod pager;
mod report;
mod search;

pub use change::{Change, Field};
pub use date::PartialDate;
pub use edit::{LabelEdit, LabelField};
pub use entity::{
    Area, Artist, ArtistCredit, ArtistCreditName, Entity, EntityType, Label, LabelType, Language,
    Release, Work, WorkWriter,
};
pub use pager::PageInfo;
pub use report::{ReportPage, ReportRelease};
pub use search::{SearchResult, SearchResultPage, ViewerContext};
