//! Search result model

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::PageInfo;

/// A search hit with its relevance score
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResult<T> {
    pub entity: T,
    pub score: f64,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResultPage<T> {
    /// Hits in the order the search backend ranked them
    #[serde(default = "Vec::new")]
    pub results: Vec<SearchResult<T>>,
    pub pager: PageInfo,
    /// Query string as typed by the user
    pub query: String,
    /// When the search index was last updated, if known
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

/// What the viewing user is allowed to do
///
/// Passed explicitly to views that show user-dependent content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ViewerContext {
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub can_edit: bool,
}

impl ViewerContext {
    /// A logged-in user who may submit edits
    pub fn editor() -> Self {
        Self {
            is_authenticated: true,
            can_edit: true,
        }
    }

    /// Check if create-entity links should be offered
    pub fn may_create(&self) -> bool {
        self.is_authenticated && self.can_edit
    }
}
