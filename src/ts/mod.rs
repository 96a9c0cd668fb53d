//! Tree-sitter integration for reprinting Rust source.
//!
//! Parses Rust with tree-sitter, exposes its nodes to the collector, and
//! converts tree-sitter's byte-based points into reprint positions so that
//! comments and formatting survive untouched.

pub mod errors;
pub mod node;
pub mod parser;
pub mod passes;
pub mod validator;

pub use errors::TreeSitterError;
pub use node::node_span;
pub use parser::{ErrorNode, ParsedSource, RustParser};
pub use passes::{annotate, rename};
pub use validator::{validate_reprint, validate_syntax};
