//! Detail table for entity edits

use crate::markup::{Element, Node};

/// Builder for an edit details table
///
/// One fixed header row naming the edited entity, then zero or more field rows
/// in the order they are added.
#[derive(Debug, Clone)]
pub struct DetailTable {
    class: String,
    rows: Vec<Element>,
}

impl DetailTable {
    /// Start a table with its header row
    pub fn new(class: &str, header_label: &str, entity: Node) -> Self {
        let header = Element::new("tr")
            .child(Element::new("th").child(header_label))
            .child(Element::new("td").attr("colspan", "2").child(entity));
        Self {
            class: format!("details {class}"),
            rows: vec![header],
        }
    }

    pub fn push(&mut self, row: Element) {
        self.rows.push(row);
    }

    /// Number of rows including the header row
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn build(self) -> Element {
        Element::new("table")
            .class(self.class)
            .child(Element::new("tbody").children(self.rows))
    }
}
