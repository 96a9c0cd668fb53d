//! Ready-made node queries over tree-sitter Rust trees.
//!
//! Each pass answers "no change" for every node it does not care about, so
//! passes compose with [`crate::collect::or_else`].

use crate::collect::query;
use crate::directive::{Directive, Kind};
use crate::ts::node::node_span;
use std::convert::Infallible;
use tree_sitter::Node;

/// Node kinds that hold a single name in the Rust grammar.
const IDENTIFIER_KINDS: &[&str] = &[
    "identifier",
    "type_identifier",
    "field_identifier",
    "shorthand_field_identifier",
];

fn text_of<'a>(source: &'a str, node: &Node<'_>) -> Option<&'a str> {
    source.get(node.byte_range())
}

/// Replace every identifier spelled `from` with `to`.
pub fn rename<'a, 'tree>(
    source: &'a str,
    from: &'a str,
    to: &'a str,
) -> impl FnMut(&Node<'tree>) -> Result<Option<Directive>, Infallible> + use<'a, 'tree> {
    query(
        move |node: &Node<'tree>| {
            let is_match = IDENTIFIER_KINDS.contains(&node.kind())
                && text_of(source, node) == Some(from);
            is_match.then_some(Kind::Replace)
        },
        move |node: &Node<'tree>| node_span(source, node),
        move |_: &Node<'tree>| Ok(to.to_string()),
    )
}

/// Insert `text` before or after every item of kind `item_kind` named `name`.
///
/// `item_kind` is a tree-sitter kind such as `function_item` or
/// `struct_item`; the item's `name` field is compared against `name`.
pub fn annotate<'a, 'tree>(
    source: &'a str,
    item_kind: &'a str,
    name: &'a str,
    text: &'a str,
    kind: Kind,
) -> impl FnMut(&Node<'tree>) -> Result<Option<Directive>, Infallible> + use<'a, 'tree> {
    query(
        move |node: &Node<'tree>| {
            if node.kind() != item_kind {
                return None;
            }
            let item_name = node.child_by_field_name("name")?;
            (text_of(source, &item_name) == Some(name)).then_some(kind)
        },
        move |node: &Node<'tree>| node_span(source, node),
        move |_: &Node<'tree>| Ok(text.to_string()),
    )
}
