//! Markup tree
//!
//! Views build `Node` values instead of strings so that the same output can
//! be serialized to HTML or drawn in the terminal.

/// A node in the rendered markup tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Sequence of sibling nodes without a wrapper element
    Fragment(Vec<Node>),
}

/// An element with attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute (replacing an earlier value with the same name)
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Append a child; empty fragments are dropped
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        let child = child.into();
        if !child.is_empty() {
            self.children.push(child);
        }
        self
    }

    pub fn children<I, N>(self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        children.into_iter().fold(self, |el, c| el.child(c))
    }

    /// Append a child only when one is given
    pub fn child_opt(self, child: Option<impl Into<Node>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether the `class` attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|c| c.split_whitespace().any(|c| c == class))
    }

    /// Direct children that are elements
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().flat_map(Node::top_elements)
    }
}

impl Node {
    /// A node that renders to nothing
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Check if the node renders to nothing at all
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Fragment(nodes) => nodes.iter().all(Node::is_empty),
            Node::Text(_) | Node::Element(_) => false,
        }
    }

    /// Concatenated text of this node and its descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Fragment(nodes) => nodes.iter().for_each(|c| c.collect_text(out)),
        }
    }

    /// Outermost elements, looking through fragments
    pub fn top_elements(&self) -> Vec<&Element> {
        match self {
            Node::Element(el) => vec![el],
            Node::Text(_) => Vec::new(),
            Node::Fragment(nodes) => nodes.iter().flat_map(Node::top_elements).collect(),
        }
    }

    /// All elements with the given tag, in document order
    pub fn find_all<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk_elements(&mut |el: &'a Element| {
            if el.tag == tag {
                found.push(el);
            }
        });
        found
    }

    /// All elements carrying the given class, in document order
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk_elements(&mut |el: &'a Element| {
            if el.has_class(class) {
                found.push(el);
            }
        });
        found
    }

    fn walk_elements<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        match self {
            Node::Element(el) => {
                visit(el);
                for child in &el.children {
                    child.walk_elements(visit);
                }
            }
            Node::Text(_) => {}
            Node::Fragment(nodes) => {
                for node in nodes {
                    node.walk_elements(visit);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<Vec<Node>> for Node {
    fn from(nodes: Vec<Node>) -> Self {
        Node::Fragment(nodes)
    }
}

impl Element {
    /// Text of all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.children.iter().for_each(|c| c.collect_text(&mut out));
        out
    }
}
