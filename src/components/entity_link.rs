//! Entity reference renderers

use crate::model::{Area, ArtistCredit, Entity};
use crate::markup::{Element, Node};

/// Path of an entity's page, e.g. `/label/<gid>`
pub fn entity_path<E: Entity + ?Sized>(entity: &E) -> String {
    format!("/{}/{}", entity.entity_type().url_segment(), entity.gid())
}

/// Link to an entity, followed by its disambiguation comment if any
pub fn entity_link<E: Entity + ?Sized>(entity: &E) -> Node {
    let link = Element::new("a")
        .attr("href", entity_path(entity))
        .child(Element::new("bdi").child(entity.name()));

    if entity.comment().is_empty() {
        return link.into();
    }

    Node::Fragment(vec![
        link.into(),
        Node::text(" "),
        Element::new("span")
            .class("comment")
            .child("(")
            .child(Element::new("bdi").child(entity.comment()))
            .child(")")
            .into(),
    ])
}

/// Area link with its enclosing areas: "Sheffield, South Yorkshire, England"
pub fn descriptive_link(area: &Area) -> Node {
    let mut nodes = vec![entity_link(area)];
    for parent in &area.containment {
        nodes.push(Node::text(", "));
        nodes.push(entity_link(parent));
    }
    Node::Fragment(nodes)
}

/// Each credited artist linked under the credited name, with join phrases
pub fn artist_credit_link(credit: &ArtistCredit) -> Node {
    let mut nodes = Vec::with_capacity(credit.names.len() * 2);
    for name in &credit.names {
        let mut link = Element::new("a").attr("href", entity_path(&name.artist));
        if name.name != name.artist.name {
            link = link.attr("title", name.artist.name.clone());
        }
        nodes.push(link.child(Element::new("bdi").child(name.name.as_str())).into());
        if !name.join_phrase.is_empty() {
            nodes.push(Node::text(name.join_phrase.as_str()));
        }
    }
    Node::Fragment(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::to_html;
    use crate::model::{Artist, ArtistCreditName, Label};

    fn area(gid: &str, name: &str) -> Area {
        Area {
            id: 1,
            gid: gid.to_string(),
            name: name.to_string(),
            ..Area::default()
        }
    }

    #[test]
    fn test_entity_link_without_comment() {
        let label = Label {
            id: 1,
            gid: "g1".to_string(),
            name: "Warp".to_string(),
            comment: String::new(),
        };
        assert_eq!(
            to_html(&entity_link(&label)),
            "<a href=\"/label/g1\"><bdi>Warp</bdi></a>"
        );
    }

    #[test]
    fn test_entity_link_with_comment() {
        let label = Label {
            id: 1,
            gid: "g1".to_string(),
            name: "Warp".to_string(),
            comment: "UK".to_string(),
        };
        assert_eq!(
            to_html(&entity_link(&label)),
            "<a href=\"/label/g1\"><bdi>Warp</bdi></a> \
             <span class=\"comment\">(<bdi>UK</bdi>)</span>"
        );
    }

    #[test]
    fn test_descriptive_link_lists_containment() {
        let mut sheffield = area("a1", "Sheffield");
        sheffield.containment = vec![area("a2", "South Yorkshire"), area("a3", "England")];
        let node = descriptive_link(&sheffield);
        assert_eq!(node.text_content(), "Sheffield, South Yorkshire, England");
        assert_eq!(node.find_all("a").len(), 3);
    }

    #[test]
    fn test_artist_credit_link() {
        let credit = ArtistCredit {
            names: vec![
                ArtistCreditName {
                    artist: Artist {
                        id: 1,
                        gid: "p".to_string(),
                        name: "Paul Simon".to_string(),
                        comment: String::new(),
                    },
                    name: "Simon".to_string(),
                    join_phrase: " & ".to_string(),
                },
                ArtistCreditName {
                    artist: Artist {
                        id: 2,
                        gid: "g".to_string(),
                        name: "Garfunkel".to_string(),
                        comment: String::new(),
                    },
                    name: "Garfunkel".to_string(),
                    join_phrase: String::new(),
                },
            ],
        };
        assert_eq!(
            to_html(&artist_credit_link(&credit)),
            "<a href=\"/artist/p\" title=\"Paul Simon\"><bdi>Simon</bdi></a> &amp; \
             <a href=\"/artist/g\"><bdi>Garfunkel</bdi></a>"
        );
    }
}
