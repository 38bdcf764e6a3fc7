//! Localization seam
//!
//! Message lookup itself is provided by the host. Views only call the
//! [`Translator`] trait and interpolate the returned templates.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::markup::{Element, Node};

/// Placeholder syntax in message templates
///
/// Groups:
/// 1. argument name
/// 2. optional link text (`{uri|add a new work}`)
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z0-9_]+)(?:\|([^}]*))?\}").expect("Invalid placeholder regex")
});

/// Message catalogue lookup
pub trait Translator {
    /// Translate a message
    fn l(&self, msgid: &str) -> String;

    /// Translate a message with a disambiguating context
    fn lp(&self, msgid: &str, context: &str) -> String;

    /// Translate a message with plural forms
    fn ln(&self, singular: &str, plural: &str, n: u64) -> String;

    /// Translate a database attribute name (label type, work type, ...)
    fn lp_attributes(&self, name: &str, attribute_type: &str) -> String {
        self.lp(name, attribute_type)
    }
}

/// Returns source strings unchanged (English)
#[derive(Debug, Clone, Copy, Default)]
pub struct Untranslated;

impl Translator for Untranslated {
    fn l(&self, msgid: &str) -> String {
        msgid.to_string()
    }

    fn lp(&self, msgid: &str, _context: &str) -> String {
        msgid.to_string()
    }

    fn ln(&self, singular: &str, plural: &str, n: u64) -> String {
        let text = if n == 1 { singular } else { plural };
        text.to_string()
    }
}

/// Argument for [`expand_node`]
#[derive(Debug, Clone)]
pub enum ExpandArg {
    /// Inserted as-is for `{name}`
    Node(Node),
    /// Link target for `{name|text}`
    Href(String),
}

/// Interpolate `{name}` placeholders with plain strings
///
/// `{name|text}` is replaced by `text`. Unknown placeholders are left as they are.
pub fn expand_text(template: &str, args: &[(&str, &str)]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            if let Some(text) = caps.get(2) {
                return text.as_str().to_string();
            }
            let name = &caps[1];
            args.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Interpolate placeholders into a markup fragment
///
/// `{name}` inserts a node argument; `{name|text}` wraps `text` in a link to an
/// href argument.
pub fn expand_node(template: &str, args: &[(&str, ExpandArg)]) -> Node {
    let mut nodes = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(template) {
        let whole = caps.get(0).map(|m| m.range()).unwrap_or_default();
        if whole.start > last {
            nodes.push(Node::text(&template[last..whole.start]));
        }
        last = whole.end;

        let arg = args.iter().find(|(key, _)| *key == &caps[1]).map(|(_, a)| a);
        let link_text = caps.get(2).map(|m| m.as_str());
        let node = match (arg, link_text) {
            (Some(ExpandArg::Href(href)), Some(text)) => {
                Element::new("a").attr("href", href.clone()).child(text).into()
            }
            (Some(ExpandArg::Href(href)), None) => Node::text(href.clone()),
            (Some(ExpandArg::Node(node)), None) => node.clone(),
            (Some(ExpandArg::Node(_)), Some(text)) => Node::text(text),
            (None, _) => Node::text(&caps[0]),
        };
        nodes.push(node);
    }

    if last < template.len() {
        nodes.push(Node::text(&template[last..]));
    }
    Node::Fragment(nodes)
}

/// Append a (localized) colon to a label: "Name" -> "Name:"
pub fn add_colon_text(i18n: &dyn Translator, text: &str) -> String {
    expand_text(&i18n.l("{text}:"), &[("text", text)])
}
