//! Drawing markup trees as terminal lines
//!
//! Block elements start new lines, table rows become one line with cells
//! separated by [`symbols::CELL_SEPARATOR`], and diff highlights map to colors.
//! Inside table cells every element is drawn inline.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::diff::{NEW_ONLY_CLASS, OLD_ONLY_CLASS};
use crate::markup::{Element, Node};
use crate::ui::{symbols, theme};

/// Convert a markup tree into styled lines
pub fn to_lines(node: &Node) -> Vec<Line<'static>> {
    let mut writer = LineWriter::default();
    writer.node(node, Style::default());
    writer.finish()
}

#[derive(Debug, Default)]
struct LineWriter {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    /// Depth of enclosing table cells
    cell_depth: usize,
}

impl LineWriter {
    fn text(&mut self, text: &str, style: Style) {
        if !text.is_empty() {
            self.current.push(Span::styled(text.to_string(), style));
        }
    }

    fn break_line(&mut self) {
        if !self.current.is_empty() {
            self.lines.push(Line::from(std::mem::take(&mut self.current)));
        }
    }

    fn blank_line(&mut self) {
        self.break_line();
        if self.lines.last().is_some_and(|line| !line.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.break_line();
        while self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }

    fn node(&mut self, node: &Node, style: Style) {
        match node {
            Node::Text(text) => self.text(text, style),
            Node::Fragment(nodes) => {
                for node in nodes {
                    self.node(node, style);
                }
            }
            Node::Element(el) => self.element(el, style),
        }
    }

    fn children(&mut self, el: &Element, style: Style) {
        for child in &el.children {
            self.node(child, style);
        }
    }

    fn element(&mut self, el: &Element, style: Style) {
        let style = style.patch(element_style(el));
        let inline = self.cell_depth > 0;

        match el.tag {
            "br" if inline => self.text(symbols::INLINE_LIST_SEPARATOR, style),
            "br" => self.break_line(),
            "tr" => self.row(el, style),
            "ul" | "ol" if inline => self.inline_list(el, style, symbols::INLINE_LIST_SEPARATOR),
            "ul" if el.has_class("pagination") => {
                self.break_line();
                self.inline_list(el, style, symbols::NAV_SEPARATOR);
                self.break_line();
            }
            "ul" | "ol" => {
                self.break_line();
                for item in el.child_elements() {
                    self.text(symbols::BULLET, style);
                    self.children(item, style);
                    self.break_line();
                }
            }
            "h1" | "h2" | "h3" if !inline => {
                self.break_line();
                self.children(el, style);
                self.blank_line();
            }
            "table" | "thead" | "tbody" | "nav" | "div" | "p" | "li" if !inline => {
                self.break_line();
                self.children(el, style);
                self.break_line();
            }
            _ => self.children(el, style),
        }
    }

    fn row(&mut self, el: &Element, style: Style) {
        self.break_line();
        self.cell_depth += 1;
        for (i, cell) in el.child_elements().enumerate() {
            if i > 0 {
                self.text(
                    symbols::CELL_SEPARATOR,
                    Style::default().fg(theme::markup_view::RULE),
                );
            }
            self.children(cell, style.patch(element_style(cell)));
        }
        self.cell_depth -= 1;
        self.break_line();
    }

    fn inline_list(&mut self, el: &Element, style: Style, separator: &str) {
        for (i, item) in el.child_elements().enumerate() {
            if i > 0 {
                self.text(separator, style);
            }
            self.children(item, style.patch(element_style(item)));
        }
    }
}

fn element_style(el: &Element) -> Style {
    use theme::markup_view as colors;

    match el.tag {
        "h1" | "h2" | "h3" => Style::default()
            .fg(colors::HEADING)
            .add_modifier(Modifier::BOLD),
        "th" => Style::default().add_modifier(Modifier::BOLD),
        "a" => Style::default()
            .fg(colors::LINK)
            .add_modifier(Modifier::UNDERLINED),
        "code" => Style::default().fg(colors::CODE),
        "span" if el.has_class(OLD_ONLY_CLASS) => Style::default()
            .fg(colors::REMOVED)
            .add_modifier(Modifier::CROSSED_OUT),
        "span" if el.has_class(NEW_ONLY_CLASS) => Style::default()
            .fg(colors::ADDED)
            .add_modifier(Modifier::BOLD),
        "span" if el.has_class("comment") || el.has_class("disabled") => {
            Style::default().fg(colors::MUTED)
        }
        _ => Style::default(),
    }
}
