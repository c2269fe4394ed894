//! Board cells addressed in row-major order.

use std::fmt;

/// A cell index on the 3x3 board.
///
/// Index = row * 3 + col, so the top-left cell is 0 and the bottom-right is 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 9;

    /// Create a square from a row and column, returning `None` if either is out of range.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < 3 && col < 3 {
            Some(Square(row * 3 + col))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 9 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `index < 9`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 9);
        Square(index)
    }

    /// Return the zero-based index (0..8).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this square, 0 at the top.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 3
    }

    /// Column of this square, 0 at the left.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 3
    }

    /// Iterate over all 9 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..9).map(Square)
    }

    pub const TOP_LEFT: Square = Square(0);
    pub const TOP: Square = Square(1);
    pub const TOP_RIGHT: Square = Square(2);
    pub const LEFT: Square = Square(3);
    pub const CENTER: Square = Square(4);
    pub const RIGHT: Square = Square(5);
    pub const BOTTOM_LEFT: Square = Square(6);
    pub const BOTTOM: Square = Square(7);
    pub const BOTTOM_RIGHT: Square = Square(8);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
