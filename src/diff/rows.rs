//! Diff and full-change table rows

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{Element, Node};

use super::script::TextDiff;
use super::tokens::Tokenized;
use super::{SPLIT_DATE, SPLIT_LIST, SPLIT_WORDS};

static WORDS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPLIT_WORDS).expect("Invalid word split regex"));

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPLIT_DATE).expect("Invalid date split regex"));

static LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPLIT_LIST).expect("Invalid list split regex"));

/// Class marking content only present on the old side
pub const OLD_ONLY_CLASS: &str = "diff-only-a";
/// Class marking content only present on the new side
pub const NEW_ONLY_CLASS: &str = "diff-only-b";

/// Render a labeled row with a token-level diff of two texts
///
/// `split` is a regex marking token boundaries; without it the texts are
/// compared as a whole. An invalid pattern falls back to whole-text comparison.
pub fn diff_row(label: &str, old_text: &str, new_text: &str, split: Option<&str>) -> Element {
    let pattern = split.and_then(split_regex);
    let diff = TextDiff::new(old_text, new_text, pattern.as_deref());

    Element::new("tr")
        .child(Element::new("th").child(label))
        .child(
            Element::new("td")
                .class("old")
                .child(side_node(&diff.old, &diff.old_changed(), OLD_ONLY_CLASS)),
        )
        .child(
            Element::new("td")
                .class("new")
                .child(side_node(&diff.new, &diff.new_changed(), NEW_ONLY_CLASS)),
        )
}

/// Cached regex for the built-in split patterns, compiled otherwise
fn split_regex(pattern: &str) -> Option<Cow<'static, Regex>> {
    match pattern {
        SPLIT_WORDS => Some(Cow::Borrowed(&*WORDS_REGEX)),
        SPLIT_DATE => Some(Cow::Borrowed(&*DATE_REGEX)),
        SPLIT_LIST => Some(Cow::Borrowed(&*LIST_REGEX)),
        other => match Regex::new(other) {
            Ok(re) => Some(Cow::Owned(re)),
            Err(e) => {
                tracing::warn!(pattern = other, error = %e, "invalid diff split pattern");
                None
            }
        },
    }
}

/// Render one side: changed words highlighted, separators as plain text
fn side_node(side: &Tokenized<'_>, changed: &[bool], class: &str) -> Node {
    if side.tokens.is_empty() && side.trailing.is_empty() {
        return Element::new("span").into();
    }

    let mut nodes = Vec::with_capacity(side.tokens.len() * 2 + 1);
    for (token, changed) in side.tokens.iter().zip(changed) {
        if !token.separator.is_empty() {
            nodes.push(Node::text(token.separator));
        }
        if *changed {
            nodes.push(Element::new("span").class(class).child(token.word).into());
        } else if !token.word.is_empty() {
            nodes.push(Node::text(token.word));
        }
    }
    if !side.trailing.is_empty() {
        nodes.push(Node::text(side.trailing));
    }
    Node::Fragment(nodes)
}

/// Render a labeled row replacing old content with new content as a whole
///
/// `None` means the field had no value and renders as an empty cell.
/// Present content is wrapped in a span, highlighted when the sides differ.
pub fn full_change_row(label: &str, old: Option<Node>, new: Option<Node>) -> Element {
    let changed = old != new;
    Element::new("tr")
        .child(Element::new("th").child(label))
        .child(full_change_cell("old", old, changed.then_some(OLD_ONLY_CLASS)))
        .child(full_change_cell("new", new, changed.then_some(NEW_ONLY_CLASS)))
}

fn full_change_cell(side: &str, content: Option<Node>, highlight: Option<&str>) -> Element {
    let cell = Element::new("td").class(side.to_string());
    match content {
        Some(content) => {
            let span = match highlight {
                Some(class) => Element::new("span").class(class),
                None => Element::new("span"),
            };
            cell.child(span.child(content))
        }
        None => cell,
    }
}
