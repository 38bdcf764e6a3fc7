//! Search results shell shared by all entity types

use chrono::{DateTime, Utc};

use crate::format::format_timestamp;
use crate::i18n::{Translator, expand_text};
use crate::markup::{Element, Node};
use crate::model::{SearchResult, SearchResultPage};

use super::pager::pager;
use super::row_renderer::{RowRenderer, render_rows};

/// Heading, results and the index freshness note
pub fn results_layout(
    last_updated: Option<&DateTime<Utc>>,
    body: Node,
    i18n: &dyn Translator,
) -> Node {
    let updated = last_updated.map(|ts| {
        Element::new("p").child(expand_text(
            &i18n.l("Last updated: {date}"),
            &[("date", format_timestamp(ts).as_str())],
        ))
    });

    let mut nodes = vec![
        Element::new("h1").child(i18n.l("Search Results")).into(),
        body,
    ];
    if let Some(updated) = updated {
        nodes.push(updated.into());
    }
    Node::Fragment(nodes)
}

/// Result table with a score column, built by `renderer`; rows keep backend order
///
/// `columns` are untranslated header labels following the score column.
pub fn paginated_search_results<T>(
    page: &SearchResultPage<T>,
    columns: &[&str],
    renderer: &dyn RowRenderer<SearchResult<T>>,
    i18n: &dyn Translator,
) -> Node {
    if page.results.is_empty() {
        return Element::new("p")
            .child(i18n.l("No results found. Try refining your search query."))
            .into();
    }

    let header = Element::new("tr")
        .child(Element::new("th").child(i18n.l("Score")))
        .children(
            columns
                .iter()
                .map(|column| Element::new("th").child(i18n.l(column))),
        );
    let body = Element::new("tbody").children(render_rows(&page.results, renderer));

    Node::Fragment(vec![
        pager(&page.pager, i18n),
        result_count(page.pager.total_entries, &page.query, i18n).into(),
        Element::new("table")
            .class("tbl")
            .child(Element::new("thead").child(header))
            .child(body)
            .into(),
        pager(&page.pager, i18n),
    ])
}

/// "Found 3 results for "let it be"" line above the result table
pub fn result_count(total: u64, query: &str, i18n: &dyn Translator) -> Element {
    let template = i18n.ln(
        "Found {n} result for \"{q}\"",
        "Found {n} results for \"{q}\"",
        total,
    );
    Element::new("p").class("result-count").child(expand_text(
        &template,
        &[("n", total.to_string().as_str()), ("q", query)],
    ))
}
