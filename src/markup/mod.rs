//! Markup tree and its HTML serializer

mod html;
mod node;

pub use html::{escape_into, to_html};
pub use node::{Element, Node};
