use crate::position::Span;
use std::fmt;

/// How a directive alters its node's original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Insert text immediately before the node, keeping the node's text.
    Before,
    /// Insert text immediately after the node, keeping the node's text.
    After,
    /// Drop the node's text and emit the replacement in its place.
    Replace,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Before => "before",
            Kind::After => "after",
            Kind::Replace => "replace",
        };
        f.write_str(name)
    }
}

/// A change attached to one tree node: what to emit, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a Directive does nothing until it is reprinted"]
pub struct Directive {
    pub kind: Kind,
    pub text: String,
    pub span: Span,
}

impl Directive {
    pub fn new(kind: Kind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn before(text: impl Into<String>, span: Span) -> Self {
        Self::new(Kind::Before, text, span)
    }

    pub fn after(text: impl Into<String>, span: Span) -> Self {
        Self::new(Kind::After, text, span)
    }

    pub fn replace(text: impl Into<String>, span: Span) -> Self {
        Self::new(Kind::Replace, text, span)
    }
}

/// Order directives by span: lower bound first, then upper bound.
///
/// The sort is stable, so directives with identical spans keep their
/// discovery order.
pub fn sort(directives: &mut [Directive]) {
    directives.sort_by(|a, b| a.span.cmp(&b.span));
}
