use crate::ts::errors::TreeSitterError;
use crate::ts::parser::{ErrorNode, RustParser};

/// Validate that Rust source code has no syntax errors.
pub fn validate_syntax(source: &str) -> Result<(), TreeSitterError> {
    let mut parser = RustParser::new()?;
    let parsed = parser.parse_with_source(source)?;
    errors_to_result(&parsed.error_nodes())
}

/// Validate that reprinting `original` as `reprinted` introduced no new
/// syntax errors.
///
/// Reprinting shifts byte offsets, so errors are compared by count: a source
/// that was already broken may stay broken, but not get worse.
pub fn validate_reprint(original: &str, reprinted: &str) -> Result<(), TreeSitterError> {
    let mut parser = RustParser::new()?;

    let original_errors = parser.parse_with_source(original)?.error_nodes();
    let reprinted_errors = parser.parse_with_source(reprinted)?.error_nodes();

    if reprinted_errors.len() <= original_errors.len() {
        return Ok(());
    }
    errors_to_result(&reprinted_errors)
}

fn errors_to_result(errors: &[ErrorNode]) -> Result<(), TreeSitterError> {
    match errors {
        [] => Ok(()),
        [only] => Err(TreeSitterError::SyntaxError {
            byte_start: only.byte_start,
            byte_end: only.byte_end,
        }),
        many => Err(TreeSitterError::MultipleSyntaxErrors { count: many.len() }),
    }
}
