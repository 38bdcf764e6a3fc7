//! Report page layout

use chrono::{DateTime, Utc};

use crate::format::format_timestamp;
use crate::i18n::{Translator, expand_text};
use crate::markup::{Element, Node};
use crate::model::EntityType;

/// Header data of a report page
#[derive(Debug, Clone)]
pub struct ReportHeader<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub entity_type: EntityType,
    pub total_entries: u64,
    pub generated: &'a DateTime<Utc>,
    pub filtered: bool,
    pub can_be_filtered: bool,
}

/// Title, description list and the report body
pub fn report_layout(header: &ReportHeader<'_>, body: Node, i18n: &dyn Translator) -> Node {
    let generated = expand_text(
        &i18n.l("Generated on {date}"),
        &[("date", format_timestamp(header.generated).as_str())],
    );

    let info = Element::new("ul")
        .child(Element::new("li").child(i18n.l(header.description)))
        .child(Element::new("li").child(total_text(
            header.entity_type,
            header.total_entries,
            i18n,
        )))
        .child(Element::new("li").child(generated))
        .child_opt(
            header
                .can_be_filtered
                .then(|| Element::new("li").child(filter_link(header.filtered, i18n))),
        );

    Node::Fragment(vec![
        Element::new("h1").child(i18n.l(header.title)).into(),
        info.into(),
        body,
    ])
}

/// "Total releases found: 12" in the report's entity wording
pub fn total_text(entity_type: EntityType, total: u64, i18n: &dyn Translator) -> String {
    let template = match entity_type {
        EntityType::Area => "Total areas found: {count}",
        EntityType::Artist => "Total artists found: {count}",
        EntityType::Label => "Total labels found: {count}",
        EntityType::Release => "Total releases found: {count}",
        EntityType::Work => "Total works found: {count}",
    };
    expand_text(&i18n.l(template), &[("count", total.to_string().as_str())])
}

/// Toggle between all rows and rows in the viewer's subscriptions
pub fn filter_link(filtered: bool, i18n: &dyn Translator) -> Element {
    let (href, text) = if filtered {
        ("?filter=0", "Show all results.")
    } else {
        (
            "?filter=1",
            "Show only results that are in my subscribed entities.",
        )
    };
    Element::new("a").attr("href", href).child(i18n.l(text))
}
