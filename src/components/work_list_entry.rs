//! Work table row

use crate::format::loop_parity;
use crate::i18n::{Translator, expand_text};
use crate::markup::{Element, Node};
use crate::model::{Language, Work, WorkWriter};

use super::entity_link::{artist_credit_link, entity_link, entity_path};

/// Columns rendered by [`work_list_entry`] after the score column
pub const WORK_COLUMNS: [&str; 6] = [
    "Name",
    "Writers",
    "Artists",
    "ISWC",
    "Type",
    "Lyrics Languages",
];

/// One work row: score, name, writers, artists, ISWCs, type, lyrics languages
pub fn work_list_entry(work: &Work, score: Option<f64>, index: usize, i18n: &dyn Translator) -> Element {
    let mut row = Element::new("tr").class(loop_parity(index));
    if let Some(score) = score {
        row = row
            .attr("data-score", score.to_string())
            .child(Element::new("td").child(score.to_string()));
    }

    row.child(Element::new("td").child(entity_link(work)))
        .child(Element::new("td").child(writers(&work.writers, i18n)))
        .child(Element::new("td").child(lines(work.artists.iter().map(artist_credit_link))))
        .child(Element::new("td").child(lines(work.iswcs.iter().map(|iswc| {
            Element::new("code").child(iswc.as_str()).into()
        }))))
        .child(
            Element::new("td").child(
                work.work_type
                    .as_deref()
                    .map(|t| Node::text(i18n.lp_attributes(t, "work_type")))
                    .unwrap_or_else(Node::empty),
            ),
        )
        .child(Element::new("td").child(lines(
            work.languages
                .iter()
                .map(|language| Node::text(language_name(language, i18n))),
        )))
}

/// Writer links with their roles: "John Lennon (lyricist, composer)"
fn writers(writers: &[WorkWriter], i18n: &dyn Translator) -> Node {
    if writers.is_empty() {
        return Node::empty();
    }
    let items = writers.iter().map(|writer| {
        let link = Element::new("a")
            .attr("href", entity_path(&writer.artist))
            .child(Element::new("bdi").child(writer.artist.name.as_str()));
        if writer.roles.is_empty() {
            return Node::from(link);
        }
        let roles = writer
            .roles
            .iter()
            .map(|role| i18n.lp_attributes(role, "work_attribute_type"))
            .collect::<Vec<_>>()
            .join(", ");
        Node::Fragment(vec![
            link.into(),
            Node::text(expand_text(&i18n.l(" ({roles})"), &[("roles", roles.as_str())])),
        ])
    });
    Element::new("ul").children(items.map(|item| Element::new("li").child(item))).into()
}

/// Nodes separated by line breaks
fn lines(nodes: impl Iterator<Item = Node>) -> Node {
    let mut out = Vec::new();
    for (i, node) in nodes.enumerate() {
        if i > 0 {
            out.push(Element::new("br").into());
        }
        out.push(node);
    }
    Node::Fragment(out)
}

fn language_name(language: &Language, i18n: &dyn Translator) -> String {
    if language.code == Language::NO_LYRICS {
        i18n.l("[No lyrics]")
    } else {
        i18n.lp_attributes(&language.name, "language")
    }
}
