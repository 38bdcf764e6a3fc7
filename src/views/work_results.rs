//! Search results for works

use crate::components::{
    WORK_COLUMNS, paginated_search_results, results_layout, work_list_entry,
};
use crate::format::encode_uri_component;
use crate::i18n::{ExpandArg, Translator, expand_node};
use crate::markup::{Element, Node};
use crate::model::{SearchResult, SearchResultPage, ViewerContext, Work};

/// Work search results, plus an "add a new work" prompt for editors
pub fn work_results(
    page: &SearchResultPage<Work>,
    viewer: &ViewerContext,
    i18n: &dyn Translator,
) -> Node {
    let build_result = |result: &SearchResult<Work>, index: usize| -> Node {
        work_list_entry(&result.entity, Some(result.score), index, i18n).into()
    };

    let mut body = vec![paginated_search_results(
        page,
        &WORK_COLUMNS,
        &build_result,
        i18n,
    )];
    if viewer.may_create() {
        body.push(create_work_prompt(&page.query, i18n).into());
    }

    results_layout(page.last_updated.as_ref(), Node::Fragment(body), i18n)
}

/// Link to the work creation form pre-filled with the search query
pub fn create_work_href(query: &str) -> String {
    format!("/work/create?edit-work.name={}", encode_uri_component(query))
}

fn create_work_prompt(query: &str, i18n: &dyn Translator) -> Element {
    Element::new("p").child(expand_node(
        &i18n.l("Alternatively, you may {uri|add a new work}."),
        &[("uri", ExpandArg::Href(create_work_href(query)))],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_work_href_is_encoded() {
        assert_eq!(
            create_work_href("Let It Be"),
            "/work/create?edit-work.name=Let%20It%20Be"
        );
        assert_eq!(
            create_work_href("a&b=c"),
            "/work/create?edit-work.name=a%26b%3Dc"
        );
    }
}
