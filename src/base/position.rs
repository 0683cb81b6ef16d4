//! Position tracking for AST nodes
//!
//! Stores the source location (line/column) a parser attached to a node.
//! The tree core never interprets a span; it only stores it and copies it
//! when a subtree is cloned.

use std::fmt;

/// A span representing a range in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn from_coords(
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Whether `position` lies between `start` and `end`, both inclusive.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Whether `other` lies entirely inside this span.
    pub fn encloses(&self, other: &Span) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let span = Span::from_coords(1, 4, 3, 2);
        assert!(span.contains(Position::new(1, 4)));
        assert!(span.contains(Position::new(2, 0)));
        assert!(span.contains(Position::new(3, 2)));
        assert!(!span.contains(Position::new(1, 3)));
        assert!(!span.contains(Position::new(3, 3)));
        assert!(!span.contains(Position::new(4, 0)));
    }

    #[test]
    fn test_span_encloses() {
        let outer = Span::from_coords(0, 0, 10, 0);
        let inner = Span::from_coords(2, 3, 2, 9);
        assert!(outer.encloses(&inner));
        assert!(!inner.encloses(&outer));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::from_coords(1, 2, 3, 4).to_string(), "1:2-3:4");
    }
}
