//! Pairing entries produced by the alignment recurrence

use smallvec::SmallVec;
use std::fmt;

/// One side of a pairing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// A concrete index inside the window
    Concrete(usize),
    /// No line on this side for the entry (`NONE`)
    Dropped,
    /// Every remaining line on this side is unmatched (`ALL`)
    ///
    /// Only valid in the first entry of a history.
    Exhausted,
}

impl Position {
    /// The concrete index, if any
    pub fn index(self) -> Option<usize> {
        match self {
            Position::Concrete(index) => Some(index),
            Position::Dropped | Position::Exhausted => None,
        }
    }

    /// Whether this is the `ALL` sentinel
    pub fn is_exhausted(self) -> bool {
        matches!(self, Position::Exhausted)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Concrete(index) => write!(f, "{index}"),
            Position::Dropped => f.write_str("-NONE-"),
            Position::Exhausted => f.write_str("-ALL-"),
        }
    }
}

/// Association of a position in window A with a position in window B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    /// Position in window A
    pub a: Position,
    /// Position in window B
    pub b: Position,
}

impl Pairing {
    /// Line `a` of window A aligned with line `b` of window B
    pub fn matched(a: usize, b: usize) -> Self {
        Self {
            a: Position::Concrete(a),
            b: Position::Concrete(b),
        }
    }

    /// Entry recorded when the last B line is dropped while A sits at `a`
    pub fn drop_b(a: usize) -> Self {
        Self {
            a: Position::Concrete(a),
            b: Position::Dropped,
        }
    }

    /// Base case: B ran out, all remaining A lines are unmatched
    pub fn exhausted_a() -> Self {
        Self {
            a: Position::Exhausted,
            b: Position::Dropped,
        }
    }

    /// Base case: A ran out, all remaining B lines are unmatched
    pub fn exhausted_b() -> Self {
        Self {
            a: Position::Dropped,
            b: Position::Exhausted,
        }
    }

    /// Both sides carry concrete indices
    pub fn is_match(&self) -> bool {
        matches!(
            (self.a, self.b),
            (Position::Concrete(_), Position::Concrete(_))
        )
    }

    /// Either side carries the `ALL` sentinel
    pub fn is_exhaustion(&self) -> bool {
        self.a.is_exhausted() || self.b.is_exhausted()
    }
}

impl fmt::Display for Pairing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Ordered pairing entries, first-emitted first
///
/// A raw alignment holds at most one entry per B line plus the leading
/// sentinel; a fixed-up one at most one entry per window line. Small windows
/// stay on the stack.
pub type History = SmallVec<[Pairing; 32]>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert!(Pairing::matched(1, 2).is_match());
        assert!(!Pairing::drop_b(3).is_match());
        assert_eq!(Pairing::drop_b(3).a.index(), Some(3));
        assert_eq!(Pairing::drop_b(3).b.index(), None);
        assert!(Pairing::exhausted_a().is_exhaustion());
        assert!(Pairing::exhausted_b().is_exhaustion());
        assert!(!Pairing::matched(0, 0).is_exhaustion());
    }

    #[test]
    fn test_display() {
        assert_eq!(Pairing::matched(0, 4).to_string(), "(0, 4)");
        assert_eq!(Pairing::drop_b(2).to_string(), "(2, -NONE-)");
        assert_eq!(Pairing::exhausted_b().to_string(), "(-NONE-, -ALL-)");
    }
}
