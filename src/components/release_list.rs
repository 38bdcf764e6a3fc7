//! Release table used by release reports

use crate::format::loop_parity;
use crate::i18n::Translator;
use crate::markup::{Element, Node};
use crate::model::{PageInfo, ReportRelease};

use super::entity_link::{artist_credit_link, entity_link};
use super::pager::pager;
use super::row_renderer::{RowRenderer, render_rows};

/// Paginated table of report releases (Release, Artist)
pub fn release_list(items: &[ReportRelease], info: &PageInfo, i18n: &dyn Translator) -> Node {
    let renderer = |item: &ReportRelease, index: usize| release_row(item, index, i18n);
    release_table(items, info, &renderer, i18n)
}

/// Same table with a custom row renderer
pub fn release_table(
    items: &[ReportRelease],
    info: &PageInfo,
    renderer: &dyn RowRenderer<ReportRelease>,
    i18n: &dyn Translator,
) -> Node {
    let head = Element::new("thead").child(
        Element::new("tr")
            .child(Element::new("th").child(i18n.l("Release")))
            .child(Element::new("th").child(i18n.l("Artist"))),
    );
    let mut body = Element::new("tbody");
    body.children = render_rows(items, renderer);

    Node::Fragment(vec![
        pager(info, i18n),
        Element::new("table")
            .class("tbl")
            .child(head)
            .child(body)
            .into(),
        pager(info, i18n),
    ])
}

/// One release row; removed releases get a placeholder text
pub fn release_row(item: &ReportRelease, index: usize, i18n: &dyn Translator) -> Node {
    let row = Element::new("tr").class(loop_parity(index));
    let row = match &item.release {
        Some(release) => row
            .child(Element::new("td").child(entity_link(release)))
            .child(Element::new("td").child(artist_credit_link(&release.artist_credit))),
        None => row.child(
            Element::new("td")
                .attr("colspan", "2")
                .child(i18n.l("This release no longer exists.")),
        ),
    };
    row.into()
}
