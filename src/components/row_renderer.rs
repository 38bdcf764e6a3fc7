//! Row building seam for list views

use crate::markup::Node;

/// Renders one item of a homogeneous list
///
/// Implemented for any `Fn(&T, usize) -> Node`, so callers can inject a closure.
pub trait RowRenderer<T> {
    fn render(&self, item: &T, index: usize) -> Node;
}

impl<T, F> RowRenderer<T> for F
where
    F: Fn(&T, usize) -> Node,
{
    fn render(&self, item: &T, index: usize) -> Node {
        self(item, index)
    }
}

/// Render every item in the order given
pub fn render_rows<T>(items: &[T], renderer: &dyn RowRenderer<T>) -> Vec<Node> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| renderer.render(item, index))
        .collect()
}
