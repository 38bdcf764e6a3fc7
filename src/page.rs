//! Page documents
//!
//! A page document is the resolved data of one view, tagged with the view
//! name. It is the input format of the `mbview` binary.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::i18n::Translator;
use crate::markup::Node;
use crate::model::{LabelEdit, ReportPage, ReportRelease, SearchResultPage, ViewerContext, Work};
use crate::views;

/// Work search page together with the viewing user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WorkSearch {
    #[serde(flatten)]
    pub page: SearchResultPage<Work>,
    #[serde(default)]
    pub viewer: ViewerContext,
}

/// Resolved data for one of the supported views
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum Page {
    EditLabel(LabelEdit),
    TracksWithSequenceIssues(ReportPage<ReportRelease>),
    WorkResults(WorkSearch),
}

impl Page {
    /// Parse a page document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a page document from disk
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let page = Self::from_json(&json).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), view = page.view_name(), "loaded page");
        Ok(page)
    }

    /// Tag value of this page's view
    pub fn view_name(&self) -> &'static str {
        match self {
            Self::EditLabel(_) => "edit_label",
            Self::TracksWithSequenceIssues(_) => "tracks_with_sequence_issues",
            Self::WorkResults(_) => "work_results",
        }
    }

    /// Human-readable title
    pub fn title(&self, i18n: &dyn Translator) -> String {
        match self {
            Self::EditLabel(edit) => format!("{} - {}", i18n.l("Edit label"), edit.label.name),
            Self::TracksWithSequenceIssues(_) => i18n.l(views::TRACKS_WITH_SEQUENCE_ISSUES_TITLE),
            Self::WorkResults(search) => {
                format!("{} - {}", i18n.l("Search Results"), search.page.query)
            }
        }
    }

    /// Render the page through its view
    pub fn render(&self, i18n: &dyn Translator) -> Node {
        let node = match self {
            Self::EditLabel(edit) => views::edit_label(edit, i18n).into(),
            Self::TracksWithSequenceIssues(report) => views::tracks_with_sequence_issues(report, i18n),
            Self::WorkResults(search) => views::work_results(&search.page, &search.viewer, i18n),
        };
        tracing::debug!(
            view = self.view_name(),
            rows = node.find_all("tr").len(),
            "rendered page"
        );
        node
    }
}
