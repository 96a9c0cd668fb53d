use crate::collect::SyntaxNode;
use crate::position::{Position, Span};
use tree_sitter::{Node, Point};

impl<'tree> SyntaxNode for Node<'tree> {
    fn children(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        Node::children(self, &mut cursor).collect()
    }
}

/// Span of `node` in reprint coordinates.
///
/// Tree-sitter reports 0-based rows and byte columns; the slicer counts
/// characters, so columns are recounted over the node's line in `source`.
pub fn node_span(source: &str, node: &Node<'_>) -> Span {
    Span {
        lower: char_position(source, node.start_byte(), node.start_position()),
        upper: char_position(source, node.end_byte(), node.end_position()),
    }
}

fn char_position(source: &str, byte: usize, point: Point) -> Position {
    let line_start = byte.saturating_sub(point.column);
    let column = source
        .get(line_start..byte)
        .map_or(point.column, |prefix| prefix.chars().count());
    Position::from_zero_based(point.row, column)
}
