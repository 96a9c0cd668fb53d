//! Single-pass splicing of ordered directives into the original text.

use crate::config::ReprintConfig;
use crate::directive::{Directive, Kind};
use crate::position::{Position, Span};
use crate::slice::{end_position, slice};
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpliceError {
    #[error("directive at {next} overlaps the preceding directive at {previous}")]
    Overlapping { previous: Span, next: Span },

    /// `end` is the last position the bound's line (or the source) can name.
    #[error("directive bound {bound} is not in the source; the nearest end is {end}")]
    OutOfBounds { bound: Position, end: Position },
}

/// Fold state threaded through the directives.
struct Splicer<'a> {
    cursor: Position,
    remaining: &'a str,
    output: String,
}

impl<'a> Splicer<'a> {
    fn take(&mut self, from: Position, bound: Position) -> &'a str {
        let sliced = slice(from, bound, self.remaining);
        self.remaining = sliced.rest;
        sliced.consumed
    }

    fn apply(&mut self, directive: &Directive) {
        let Span { lower, upper } = directive.span;
        trace!(kind = %directive.kind, span = %directive.span, "splicing directive");

        match directive.kind {
            Kind::Replace => {
                let prefix = self.take(self.cursor, lower);
                self.output.push_str(prefix);
                self.take(lower, upper);
                self.output.push_str(&directive.text);
            }
            Kind::Before => {
                let prefix = self.take(self.cursor, lower);
                self.output.push_str(prefix);
                let node_text = self.take(lower, upper);
                self.output.push_str(&directive.text);
                self.output.push_str(node_text);
            }
            Kind::After => {
                let through_node = self.take(self.cursor, upper);
                self.output.push_str(through_node);
                self.output.push_str(&directive.text);
            }
        }

        self.cursor = upper;
    }
}

/// Walk `source` and the position-ordered `directives` together.
///
/// Text outside every directive is copied verbatim and whatever follows the
/// last directive is appended untouched. Overlapping or out-of-order spans
/// are not detected here; see [`check`].
pub fn splice(directives: &[Directive], source: &str) -> String {
    let inserted: usize = directives.iter().map(|d| d.text.len()).sum();
    let mut splicer = Splicer {
        cursor: Position::START,
        remaining: source,
        output: String::with_capacity(source.len() + inserted),
    };

    for directive in directives {
        splicer.apply(directive);
    }

    let mut output = splicer.output;
    output.push_str(splicer.remaining);
    output
}

/// Run the checks enabled in `config` over position-ordered directives.
pub fn check(
    directives: &[Directive],
    source: &str,
    config: &ReprintConfig,
) -> Result<(), SpliceError> {
    if config.reject_overlapping {
        for pair in directives.windows(2) {
            let (previous, next) = (pair[0].span, pair[1].span);
            if previous.overlaps(&next) {
                return Err(SpliceError::Overlapping { previous, next });
            }
        }
    }

    if config.reject_out_of_bounds {
        let ends = line_ends(source);
        let last = end_position(source);
        for bound in directives.iter().flat_map(|d| [d.span.lower, d.span.upper]) {
            let at = ends.partition_point(|end| end.line < bound.line);
            let end = ends
                .get(at)
                .filter(|end| end.line == bound.line)
                .copied()
                .unwrap_or(last);
            if bound > end {
                return Err(SpliceError::OutOfBounds { bound, end });
            }
        }
    }

    Ok(())
}

/// Position just past the last character of every line, newline excluded.
fn line_ends(source: &str) -> Vec<Position> {
    source
        .split('\n')
        .enumerate()
        .map(|(row, line)| Position::from_zero_based(row, line.chars().count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(l1: usize, c1: usize, l2: usize, c2: usize) -> Span {
        Span::new(
            Position::new(l1, c1).unwrap(),
            Position::new(l2, c2).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn no_directives_copies_source() {
        assert_eq!(splice(&[], "fn main() {}\n"), "fn main() {}\n");
    }

    #[test]
    fn replace_first_statement() {
        let source = "int x = 1;\nint y = 2;\n";
        let directives = [Directive::replace("long x = 1L;", span(1, 1, 1, 11))];
        assert_eq!(splice(&directives, source), "long x = 1L;\nint y = 2;\n");
    }

    #[test]
    fn before_keeps_node_text() {
        let directives = [Directive::before("let ", span(1, 1, 1, 2))];
        assert_eq!(splice(&directives, "a = b;\n"), "let a = b;\n");
    }

    #[test]
    fn after_keeps_node_text() {
        let directives = [Directive::after(".clone()", span(1, 6, 1, 7))];
        assert_eq!(splice(&directives, "call(x);\n"), "call(x.clone());\n");
    }

    #[test]
    fn zero_width_inserts_only() {
        let directives = [Directive::replace("-", span(1, 2, 1, 2))];
        assert_eq!(splice(&directives, "ab"), "a-b");
    }

    #[test]
    fn multiple_directives_across_lines() {
        let source = "int x = 1;\nint y = 2;\nint z = 3;\n";
        let directives = [
            Directive::replace("long", span(1, 1, 1, 4)),
            Directive::before("final ", span(2, 1, 2, 4)),
            Directive::after(" /* z */", span(3, 5, 3, 6)),
        ];
        assert_eq!(
            splice(&directives, source),
            "long x = 1;\nfinal int y = 2;\nint z /* z */ = 3;\n"
        );
    }

    #[test]
    fn multiline_replace() {
        let source = "fn a() {\n    1\n}\nfn b() {}\n";
        let directives = [Directive::replace("fn a() { 2 }", span(1, 1, 3, 2))];
        assert_eq!(splice(&directives, source), "fn a() { 2 }\nfn b() {}\n");
    }

    #[test]
    fn span_past_end_truncates() {
        let directives = [Directive::replace("X", span(1, 2, 4, 1))];
        assert_eq!(splice(&directives, "abc"), "aX");
    }

    #[test]
    fn unchecked_by_default() {
        let directives = [
            Directive::replace("X", span(1, 1, 1, 5)),
            Directive::replace("Y", span(1, 3, 9, 1)),
        ];
        assert!(check(&directives, "abc", &ReprintConfig::default()).is_ok());
    }

    #[test]
    fn span_past_end_rejected_when_checking_bounds() {
        let config = ReprintConfig {
            reject_out_of_bounds: true,
            ..ReprintConfig::default()
        };
        let directives = [Directive::replace("X", span(1, 2, 4, 1))];
        let err = check(&directives, "abc", &config).unwrap_err();
        assert_eq!(
            err,
            SpliceError::OutOfBounds {
                bound: Position::new(4, 1).unwrap(),
                end: Position::new(1, 4).unwrap(),
            }
        );
    }

    #[test]
    fn column_past_line_end_rejected_when_checking_bounds() {
        let source = "ab\ncd\n";
        let directives = [
            Directive::replace("X", span(1, 1, 1, 99)),
            Directive::replace("Y", span(2, 1, 2, 3)),
        ];
        let err = check(&directives, source, &ReprintConfig::strict()).unwrap_err();
        assert_eq!(
            err,
            SpliceError::OutOfBounds {
                bound: Position::new(1, 99).unwrap(),
                end: Position::new(1, 3).unwrap(),
            }
        );

        let lower = [Directive::before("!", span(2, 4, 3, 1))];
        assert!(matches!(
            check(&lower, source, &ReprintConfig::strict()),
            Err(SpliceError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn line_end_positions_are_in_bounds() {
        let source = "ab\ncd\n";
        let directives = [
            Directive::after(";", span(1, 1, 1, 3)),
            Directive::replace("Y", span(2, 1, 2, 3)),
            Directive::before("// end\n", span(3, 1, 3, 1)),
        ];
        assert!(check(&directives, source, &ReprintConfig::strict()).is_ok());
        assert_eq!(splice(&directives, source), "ab;\nY\n// end\n");
    }

    #[test]
    fn insertion_inside_previous_span_is_overlapping() {
        let directives = [
            Directive::replace("X", span(1, 1, 1, 5)),
            Directive::before("|", span(1, 3, 1, 3)),
        ];
        assert!(matches!(
            check(&directives, "abcdef", &ReprintConfig::strict()),
            Err(SpliceError::Overlapping { .. })
        ));
    }

    #[test]
    fn span_ending_at_end_of_source_is_in_bounds() {
        let directives = [Directive::after("!", span(1, 1, 2, 1))];
        assert!(check(&directives, "abc\n", &ReprintConfig::strict()).is_ok());
    }

    #[test]
    fn overlap_rejected_when_checking() {
        let config = ReprintConfig {
            reject_overlapping: true,
            ..ReprintConfig::default()
        };
        let directives = [
            Directive::replace("X", span(1, 1, 1, 5)),
            Directive::replace("Y", span(1, 3, 1, 7)),
        ];
        let err = check(&directives, "abcdefgh", &config).unwrap_err();
        assert!(matches!(err, SpliceError::Overlapping { .. }));
    }

    #[test]
    fn adjacent_spans_are_not_overlapping() {
        let directives = [
            Directive::replace("X", span(1, 1, 1, 3)),
            Directive::before("|", span(1, 3, 1, 3)),
            Directive::replace("Y", span(1, 3, 1, 5)),
        ];
        assert!(check(&directives, "abcdef", &ReprintConfig::strict()).is_ok());
        assert_eq!(splice(&directives, "abcdef"), "X|Yef");
    }
}
