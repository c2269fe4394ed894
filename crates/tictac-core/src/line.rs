//! The eight winning lines of the 3x3 board.

use crate::board::Board;
use crate::mark::Mark;
use crate::square::Square;

/// Three squares that win when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line([Square; 3]);

impl Line {
    /// Total number of lines.
    pub const COUNT: usize = 8;

    /// All lines: rows top to bottom, columns left to right, then the two diagonals.
    pub const ALL: [Line; Self::COUNT] = [
        Line::from_indices([0, 1, 2]),
        Line::from_indices([3, 4, 5]),
        Line::from_indices([6, 7, 8]),
        Line::from_indices([0, 3, 6]),
        Line::from_indices([1, 4, 7]),
        Line::from_indices([2, 5, 8]),
        Line::from_indices([0, 4, 8]),
        Line::from_indices([2, 4, 6]),
    ];

    const fn from_indices(indices: [u8; 3]) -> Line {
        Line([
            Square::from_index_unchecked(indices[0]),
            Square::from_index_unchecked(indices[1]),
            Square::from_index_unchecked(indices[2]),
        ])
    }

    /// The squares of this line in ascending order.
    #[inline]
    pub const fn squares(self) -> [Square; 3] {
        self.0
    }

    /// Return the mark holding all three squares, if any.
    #[inline]
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        let mark = board.cell(a)?;
        if board.cell(b) == Some(mark) && board.cell(c) == Some(mark) {
            Some(mark)
        } else {
            None
        }
    }

    /// Return `true` if the line contains the given square.
    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        self.0.contains(&sq)
    }
}
