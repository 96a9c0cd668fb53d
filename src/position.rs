//! Line/column coordinates and half-open spans over source text.
//!
//! Coordinates are 1-based and count characters, not bytes. A newline is the
//! only character that moves a position to the next line.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid line number {0}: lines start at 1")]
    InvalidLine(usize),

    #[error("invalid column number {0}: columns start at 1")]
    InvalidColumn(usize),

    #[error("inverted span: lower bound {lower} is after upper bound {upper}")]
    InvertedSpan { lower: Position, upper: Position },
}

/// A 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line(usize);

impl Line {
    pub const FIRST: Line = Line(1);

    pub fn new(line: usize) -> Result<Self, PositionError> {
        if line < 1 {
            return Err(PositionError::InvalidLine(line));
        }
        Ok(Line(line))
    }

    pub fn get(self) -> usize {
        self.0
    }

    fn next(self) -> Self {
        Line(self.0 + 1)
    }
}

/// A 1-based column number, counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(usize);

impl Column {
    pub const FIRST: Column = Column(1);

    pub fn new(column: usize) -> Result<Self, PositionError> {
        if column < 1 {
            return Err(PositionError::InvalidColumn(column));
        }
        Ok(Column(column))
    }

    pub fn get(self) -> usize {
        self.0
    }

    fn next(self) -> Self {
        Column(self.0 + 1)
    }
}

/// A location in source text.
///
/// Ordering is lexicographic: line first, then column. Field order matters
/// for the derived `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: Line,
    pub column: Column,
}

impl Position {
    /// The first character of any source, (1, 1).
    pub const START: Position = Position {
        line: Line::FIRST,
        column: Column::FIRST,
    };

    pub fn new(line: usize, column: usize) -> Result<Self, PositionError> {
        Ok(Self {
            line: Line::new(line)?,
            column: Column::new(column)?,
        })
    }

    /// Build a position from 0-based coordinates, as reported by most parsers.
    pub fn from_zero_based(row: usize, column: usize) -> Self {
        Self {
            line: Line(row + 1),
            column: Column(column + 1),
        }
    }

    /// Move past a newline: next line, column reset to 1.
    pub fn advance_line(self) -> Self {
        Self {
            line: self.line.next(),
            column: Column::FIRST,
        }
    }

    /// Move past any character other than a newline.
    pub fn advance_column(self) -> Self {
        Self {
            line: self.line,
            column: self.column.next(),
        }
    }

    /// Move past `ch`.
    pub fn advance(self, ch: char) -> Self {
        if ch == '\n' {
            self.advance_line()
        } else {
            self.advance_column()
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line.0, self.column.0)
    }
}

/// Half-open range `[lower, upper)` of positions.
///
/// A zero-width span (`lower == upper`) marks an insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    pub lower: Position,
    pub upper: Position,
}

impl Span {
    pub fn new(lower: Position, upper: Position) -> Result<Self, PositionError> {
        if lower > upper {
            return Err(PositionError::InvertedSpan { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Zero-width span at `at`.
    pub fn point(at: Position) -> Self {
        Self {
            lower: at,
            upper: at,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lower == self.upper
    }

    pub fn contains(&self, position: Position) -> bool {
        self.lower <= position && position < self.upper
    }

    /// True when the spans share a character, or when one is a zero-width
    /// span strictly inside the other.
    ///
    /// Spans that only touch at a bound do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.lower < other.upper && other.lower < self.upper
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.lower, self.upper)
    }
}
