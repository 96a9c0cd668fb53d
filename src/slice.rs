//! Position-driven slicing of the remaining source text.

use crate::position::Position;

/// Result of consuming source text up to a bound.
///
/// `consumed` and `rest` borrow from the sliced input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice<'a> {
    pub consumed: &'a str,
    pub rest: &'a str,
    /// Logical position of the first character of `rest`.
    pub reached: Position,
}

/// Consume characters of `remaining`, which starts at `cursor`, until the
/// logical position is no longer before `bound`.
///
/// Stops early, without error, if `remaining` is exhausted first.
pub fn slice(cursor: Position, bound: Position, remaining: &str) -> Slice<'_> {
    let mut position = cursor;
    let mut split = remaining.len();

    for (offset, ch) in remaining.char_indices() {
        if position >= bound {
            split = offset;
            break;
        }
        position = position.advance(ch);
    }

    let (consumed, rest) = remaining.split_at(split);
    Slice {
        consumed,
        rest,
        reached: position,
    }
}

/// Logical position just past the last character of `source`.
///
/// A bound is reachable by [`slice`] from the start of `source` only if it
/// is not after this position.
pub fn end_position(source: &str) -> Position {
    source.chars().fold(Position::START, Position::advance)
}
