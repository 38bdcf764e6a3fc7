//! Page navigation

use crate::i18n::{Translator, expand_text};
use crate::markup::{Element, Node};
use crate::model::PageInfo;

/// Query string selecting a page
pub fn page_href(page: u32) -> String {
    format!("?page={page}")
}

/// Previous / "Page x of y" / Next navigation; nothing for a single page
pub fn pager(info: &PageInfo, i18n: &dyn Translator) -> Node {
    let last = info.last_page();
    if last <= 1 {
        return Node::empty();
    }
    let info = info.clamped();
    let current = info.current_page;

    let previous = nav_item(
        i18n.l("Previous"),
        info.has_previous().then(|| page_href(current - 1)),
    );
    let position = Element::new("li").child(expand_text(
        &i18n.l("Page {page} of {total}"),
        &[
            ("page", current.to_string().as_str()),
            ("total", last.to_string().as_str()),
        ],
    ));
    let next = nav_item(
        i18n.l("Next"),
        info.has_next().then(|| page_href(current + 1)),
    );

    Element::new("nav")
        .child(
            Element::new("ul")
                .class("pagination")
                .child(previous)
                .child(position)
                .child(next),
        )
        .into()
}

fn nav_item(text: String, href: Option<String>) -> Element {
    let inner = match href {
        Some(href) => Element::new("a").attr("href", href).child(text),
        None => Element::new("span").class("disabled").child(text),
    };
    Element::new("li").child(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Untranslated;
    use crate::markup::to_html;

    #[test]
    fn test_single_page_renders_nothing() {
        assert!(pager(&PageInfo::new(1, 25, 10), &Untranslated).is_empty());
        assert!(pager(&PageInfo::new(1, 25, 0), &Untranslated).is_empty());
    }

    #[test]
    fn test_first_page() {
        let html = to_html(&pager(&PageInfo::new(1, 25, 60), &Untranslated));
        assert_eq!(
            html,
            "<nav><ul class=\"pagination\">\
             <li><span class=\"disabled\">Previous</span></li>\
             <li>Page 1 of 3</li>\
             <li><a href=\"?page=2\">Next</a></li>\
             </ul></nav>"
        );
    }

    #[test]
    fn test_middle_page_links_both_ways() {
        let node = pager(&PageInfo::new(2, 25, 60), &Untranslated);
        let hrefs: Vec<_> = node
            .find_all("a")
            .iter()
            .filter_map(|a| a.get_attr("href"))
            .map(str::to_string)
            .collect();
        assert_eq!(hrefs, vec!["?page=1", "?page=3"]);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let node = pager(&PageInfo::new(7, 25, 60), &Untranslated);
        assert!(node.text_content().contains("Page 3 of 3"));
        let hrefs: Vec<_> = node
            .find_all("a")
            .iter()
            .filter_map(|a| a.get_attr("href"))
            .collect();
        assert_eq!(hrefs, vec!["?page=2"]);
    }
}
