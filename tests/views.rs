//! Rendering tests for the three page views
//!
//! Checks structure through the markup tree and pins small outputs with
//! inline insta snapshots.

use chrono::{TimeZone, Utc};
use insta::assert_snapshot;

use mbview::diff::diff_row;
use mbview::i18n::Untranslated;
use mbview::markup::{Node, to_html};
use mbview::model::{
    Change, Label, LabelEdit, PageInfo, Release, ReportPage, ReportRelease, SearchResult,
    SearchResultPage, ViewerContext, Work,
};
use mbview::page::Page;
use mbview::views::{create_work_href, edit_label, tracks_with_sequence_issues, work_results};

fn warp() -> Label {
    Label {
        id: 1,
        gid: "46f0f4cd".to_string(),
        name: "Warp".to_string(),
        comment: String::new(),
    }
}

fn work(id: u32, name: &str) -> Work {
    Work {
        id,
        gid: format!("w{id}"),
        name: name.to_string(),
        ..Work::default()
    }
}

fn search_page(scores: &[f64], total: u64) -> SearchResultPage<Work> {
    SearchResultPage {
        results: scores
            .iter()
            .enumerate()
            .map(|(i, score)| SearchResult {
                entity: work(i as u32, &format!("Work {i}")),
                score: *score,
            })
            .collect(),
        pager: PageInfo::new(1, 25, total),
        query: "let it be".to_string(),
        last_updated: None,
    }
}

fn report(items: Vec<ReportRelease>, total: u64) -> ReportPage<ReportRelease> {
    ReportPage {
        items,
        pager: PageInfo::new(1, 25, total),
        generated: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        filtered: false,
        can_be_filtered: false,
    }
}

// =============================================================================
// Edit label
// =============================================================================

#[test]
fn test_edit_label_name_change_snapshot() {
    let edit = LabelEdit::new(warp()).with_name("Warp", "Warp Records");
    let html = to_html(&edit_label(&edit, &Untranslated).into());
    assert_snapshot!(html, @r#"<table class="details edit-label"><tbody><tr><th>Label:</th><td colspan="2"><a href="/label/46f0f4cd"><bdi>Warp</bdi></a></td></tr><tr><th>Name:</th><td class="old">Warp</td><td class="new">Warp <span class="diff-only-b">Records</span></td></tr></tbody></table>"#);
}

#[test]
fn test_edit_label_rows_for_present_fields_only() {
    let edit = LabelEdit::new(warp())
        .with_name("Warp", "Warp Records")
        .with_ended(false, true);
    let node: Node = edit_label(&edit, &Untranslated).into();

    let labels: Vec<_> = node.find_all("th").iter().map(|th| th.text_content()).collect();
    assert_eq!(labels, vec!["Label:", "Name:", "Ended:"]);
}

#[test]
fn test_edit_label_ended_is_full_change() {
    let edit = LabelEdit::new(warp()).with_ended(false, true);
    let node: Node = edit_label(&edit, &Untranslated).into();

    let removed = node.find_by_class("diff-only-a");
    let added = node.find_by_class("diff-only-b");
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].text_content(), "No");
    assert_eq!(added[0].text_content(), "Yes");
}

#[test]
fn test_ipi_codes_single_removed_element() {
    let mut edit = LabelEdit::new(warp());
    edit.ipi_codes = Some(Change::new(
        Some(vec!["1".to_string(), "2".to_string()]),
        Some(vec!["1".to_string()]),
    ));
    let node: Node = edit_label(&edit, &Untranslated).into();

    let removed: Vec<_> = node
        .find_by_class("diff-only-a")
        .iter()
        .map(|span| span.text_content())
        .collect();
    assert_eq!(removed, vec!["2"]);
    assert!(node.find_by_class("diff-only-b").is_empty());
}

#[test]
fn test_diff_row_whitespace_is_not_a_change() {
    let node: Node = diff_row("Name:", "Warp  Records", "Warp Records", Some(r"\s+")).into();
    assert!(node.find_by_class("diff-only-a").is_empty());
    assert!(node.find_by_class("diff-only-b").is_empty());
}

// =============================================================================
// Tracks with sequence issues
// =============================================================================

#[test]
fn test_report_empty_page() {
    let node = tracks_with_sequence_issues(&report(Vec::new(), 0), &Untranslated);
    let text = node.text_content();
    assert!(text.contains("Releases with track number issues"));
    assert!(text.contains("Total releases found: 0"));
    assert!(text.contains("Generated on 2024-05-01 12:30 UTC"));
    assert!(node.find_all("tbody")[0].children.is_empty());
    assert!(node.find_all("nav").is_empty());
}

#[test]
fn test_report_rows_keep_order_and_mark_removed_releases() {
    let release = |id: u32, name: &str| ReportRelease {
        release_id: id,
        release: Some(Release {
            id,
            gid: format!("r{id}"),
            name: name.to_string(),
            ..Release::default()
        }),
    };
    let items = vec![
        release(3, "Drukqs"),
        ReportRelease {
            release_id: 9,
            release: None,
        },
        release(1, "Syro"),
    ];
    let node = tracks_with_sequence_issues(&report(items, 3), &Untranslated);

    let rows: Vec<_> = node.find_all("tbody")[0]
        .child_elements()
        .map(|tr| tr.text_content())
        .collect();
    assert_eq!(
        rows,
        vec!["Drukqs", "This release no longer exists.", "Syro"]
    );
}

#[test]
fn test_report_pager_on_multiple_pages() {
    let node = tracks_with_sequence_issues(&report(Vec::new(), 60), &Untranslated);
    let navs = node.find_all("nav");
    assert_eq!(navs.len(), 2);
    assert!(navs[0].text_content().contains("Page 1 of 3"));
}

// =============================================================================
// Work results
// =============================================================================

#[test]
fn test_work_results_preserve_backend_order() {
    let page = search_page(&[0.9, 0.5, 0.1], 3);
    let node = work_results(&page, &ViewerContext::default(), &Untranslated);

    let scores: Vec<_> = node.find_all("tbody")[0]
        .child_elements()
        .map(|tr| tr.get_attr("data-score").unwrap_or_default().to_string())
        .collect();
    assert_eq!(scores, vec!["0.9", "0.5", "0.1"]);
}

#[test]
fn test_work_results_header_columns() {
    let page = search_page(&[1.0], 1);
    let node = work_results(&page, &ViewerContext::default(), &Untranslated);

    let headers: Vec<_> = node.find_all("th").iter().map(|th| th.text_content()).collect();
    assert_eq!(
        headers,
        vec![
            "Score",
            "Name",
            "Writers",
            "Artists",
            "ISWC",
            "Type",
            "Lyrics Languages"
        ]
    );
}

#[test]
fn test_work_results_empty() {
    let page = search_page(&[], 0);
    let node = work_results(&page, &ViewerContext::default(), &Untranslated);
    assert!(
        node.text_content()
            .contains("No results found. Try refining your search query.")
    );
    assert!(node.find_all("table").is_empty());
}

#[test]
fn test_work_results_show_total_and_query() {
    let page = search_page(&[0.5, 0.5, 0.5], 3);
    let node = work_results(&page, &ViewerContext::default(), &Untranslated);

    let counts = node.find_by_class("result-count");
    assert_eq!(counts.len(), 1);
    assert_eq!(counts[0].text_content(), "Found 3 results for \"let it be\"");
    assert!(node.text_content().contains("let it be"));
}

#[test]
fn test_work_results_count_singular() {
    let page = search_page(&[0.8], 1);
    let html = to_html(&work_results(&page, &ViewerContext::default(), &Untranslated));
    assert!(html.contains("Found 1 result for &quot;let it be&quot;"));
}

#[test]
fn test_create_link_only_for_editors() {
    let page = search_page(&[0.7], 1);
    let href = create_work_href("let it be");
    assert_eq!(href, "/work/create?edit-work.name=let%20it%20be");

    let anonymous = work_results(&page, &ViewerContext::default(), &Untranslated);
    assert!(
        anonymous
            .find_all("a")
            .iter()
            .all(|a| a.get_attr("href") != Some(href.as_str()))
    );

    let editor = work_results(&page, &ViewerContext::editor(), &Untranslated);
    let links: Vec<_> = editor
        .find_all("a")
        .into_iter()
        .filter(|a| a.get_attr("href") == Some(href.as_str()))
        .collect();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].text_content(), "add a new work");
}

// =============================================================================
// Demo documents
// =============================================================================

#[test]
fn test_demo_documents_render() {
    let edit = Page::from_json(include_str!("../demos/edit_label.json")).unwrap();
    let html = to_html(&edit.render(&Untranslated));
    assert!(html.contains("Warp <span class=\"diff-only-b\">Records</span>"));
    assert!(html.contains("<bdi>Sheffield</bdi>"));

    let report = Page::from_json(include_str!("../demos/tracks_with_sequence_issues.json")).unwrap();
    let html = to_html(&report.render(&Untranslated));
    assert!(html.contains("Selected Ambient Works 85-92"));
    assert!(html.contains("This release no longer exists."));
    assert!(html.contains("?filter=1"));

    let search = Page::from_json(include_str!("../demos/work_results.json")).unwrap();
    let html = to_html(&search.render(&Untranslated));
    assert!(html.contains("data-score=\"1\""));
    assert!(html.contains("[No lyrics]"));
    assert!(html.contains("/work/create?edit-work.name=yesterday"));
}
