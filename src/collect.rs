//! Pre-order tree walk that gathers change directives.
//!
//! The walk asks a node query about every visited node. A node that answers
//! with a directive owns its whole subtree: its children are never visited.

use crate::directive::{Directive, Kind};
use crate::position::Span;
use std::convert::Infallible;
use tracing::trace;

/// The only capability the collector needs from a tree: ordered children.
///
/// Implement it for a borrowed node type (`&MyNode`) or for a cheap copyable
/// handle such as `tree_sitter::Node`.
pub trait SyntaxNode: Sized {
    fn children(&self) -> Vec<Self>;
}

/// Walk the tree rooted at `root`, asking `query` about each visited node.
///
/// Directives come back in discovery order, not position order. `query` is
/// called exactly once per visited node, in pre-order with siblings left to
/// right. The first error it returns stops the walk and is propagated as is.
pub fn collect<N, E, Q>(mut query: Q, root: N) -> Result<Vec<Directive>, E>
where
    N: SyntaxNode,
    Q: FnMut(&N) -> Result<Option<Directive>, E>,
{
    let mut directives = Vec::new();
    // Each frame holds the not-yet-visited siblings at one depth.
    let mut stack = vec![vec![root].into_iter()];
    let mut visited = 0usize;

    while let Some(frame) = stack.last_mut() {
        let Some(node) = frame.next() else {
            stack.pop();
            continue;
        };

        visited += 1;
        match query(&node)? {
            Some(directive) => {
                trace!(kind = %directive.kind, span = %directive.span, "matched node");
                directives.push(directive);
            }
            None => {
                let children = node.children();
                if !children.is_empty() {
                    stack.push(children.into_iter());
                }
            }
        }
    }

    trace!(visited, matched = directives.len(), "tree walk finished");
    Ok(directives)
}

/// Node query that never reports a change.
///
/// Passes fall through to this for node types they do not care about.
pub fn no_change<N>(_node: &N) -> Result<Option<Directive>, Infallible> {
    Ok(None)
}

/// Build a node query from its three parts.
///
/// `is_changed` decides whether a node is modified and how, `span` locates
/// the node in the original source, and `render` produces the text to emit.
/// `span` and `render` are only consulted for changed nodes.
pub fn query<N, E, C, S, R>(
    mut is_changed: C,
    span: S,
    mut render: R,
) -> impl FnMut(&N) -> Result<Option<Directive>, E>
where
    C: FnMut(&N) -> Option<Kind>,
    S: Fn(&N) -> Span,
    R: FnMut(&N) -> Result<String, E>,
{
    move |node: &N| match is_changed(node) {
        Some(kind) => {
            let text = render(node)?;
            Ok(Some(Directive::new(kind, text, span(node))))
        }
        None => Ok(None),
    }
}

/// Combine two queries: ask `first`, and fall back to `second` when `first`
/// reports no change.
pub fn or_else<N, E, A, B>(
    mut first: A,
    mut second: B,
) -> impl FnMut(&N) -> Result<Option<Directive>, E>
where
    A: FnMut(&N) -> Result<Option<Directive>, E>,
    B: FnMut(&N) -> Result<Option<Directive>, E>,
{
    move |node: &N| match first(node)? {
        Some(directive) => Ok(Some(directive)),
        None => second(node),
    }
}
