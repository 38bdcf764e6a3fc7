//! Report page model

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{PageInfo, Release};

/// One page of a generated report
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportPage<T> {
    /// Rows in the order the report query produced them
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub pager: PageInfo,
    /// When the report data was generated
    pub generated: DateTime<Utc>,
    /// Whether the rows are restricted to the viewer's subscriptions
    #[serde(default)]
    pub filtered: bool,
    /// Whether this report supports subscription filtering
    #[serde(default)]
    pub can_be_filtered: bool,
}

impl<T> ReportPage<T> {
    /// Total number of rows across all pages
    pub fn total_entries(&self) -> u64 {
        self.pager.total_entries
    }
}

/// Report row referencing a release
///
/// `release` is `None` when the release was removed after the report ran.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportRelease {
    pub release_id: u32,
    #[serde(default)]
    pub release: Option<Release>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_report_page() {
        let json = r#"{
            "items": [
                {"release_id": 1, "release": {"id": 1, "gid": "r1", "name": "Selected Ambient Works"}},
                {"release_id": 2, "release": null}
            ],
            "pager": {"current_page": 1, "entries_per_page": 25, "total_entries": 2},
            "generated": "2024-03-01T04:05:00Z",
            "can_be_filtered": true
        }"#;
        let page: ReportPage<ReportRelease> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert!(page.items[1].release.is_none());
        assert_eq!(page.total_entries(), 2);
        assert!(page.can_be_filtered);
        assert!(!page.filtered);
    }
}
