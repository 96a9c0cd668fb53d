//! Tree Reprint: format-preserving reprinting of modified syntax trees
//!
//! Reprinting turns a tree whose nodes carry change directives back into
//! source text. Only the text under a changed node is altered; every other
//! byte of the original (whitespace, comments, formatting) is copied through
//! verbatim.
//!
//! # Architecture
//!
//! A call to [`reprint`] runs three steps:
//!
//! 1. [`collect`](collect::collect) walks the tree in pre-order and asks a
//!    node query about each node. A node that answers with a [`Directive`]
//!    owns its whole subtree, so its children are skipped.
//! 2. [`sort`](directive::sort) orders the directives by span.
//! 3. [`splice`](splice::splice) walks the original text and the ordered
//!    directives together, emitting untouched text, inserted text, or
//!    replacement text.
//!
//! Positions are 1-based line/column pairs counted in characters; spans are
//! half-open. The [`ts`] module adapts tree-sitter Rust trees to this model.
//!
//! # Example
//!
//! ```
//! use tree_reprint::{reprint, Directive, Position, Span, SyntaxNode};
//!
//! struct Stmt {
//!     text: &'static str,
//!     span: Span,
//! }
//!
//! impl SyntaxNode for &Stmt {
//!     fn children(&self) -> Vec<Self> {
//!         Vec::new()
//!     }
//! }
//!
//! let source = "int x = 1;\nint y = 2;\n";
//! let stmt = Stmt {
//!     text: "int x = 1;",
//!     span: Span::new(Position::new(1, 1)?, Position::new(1, 11)?)?,
//! };
//!
//! let output = reprint(
//!     |s: &&Stmt| (s.text == "int x = 1;").then(|| Directive::replace("long x = 1L;", s.span)),
//!     &stmt,
//!     source,
//! );
//! assert_eq!(output, "long x = 1L;\nint y = 2;\n");
//! # Ok::<(), tree_reprint::PositionError>(())
//! ```

pub mod collect;
pub mod config;
pub mod directive;
pub mod position;
pub mod reprint;
pub mod slice;
pub mod splice;
pub mod ts;
pub mod write;

// Re-exports
pub use collect::{collect, no_change, or_else, query, SyntaxNode};
pub use config::{load_from_path, load_from_str, ConfigError, ReprintConfig};
pub use directive::{Directive, Kind};
pub use position::{Column, Line, Position, PositionError, Span};
pub use reprint::{reprint, try_reprint, ReprintError, Reprinter};
pub use splice::SpliceError;
pub use ts::{RustParser, TreeSitterError};
pub use write::{write_reprinted, WriteError, WriteResult};
