//! The 3x3 board: nine cells, each empty or holding one mark.

use std::fmt;

use crate::error::BoardError;
use crate::line::Line;
use crate::mark::Mark;
use crate::square::Square;

/// A board snapshot. No move history is kept.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Cell contents indexed by [`Square::index()`]; `None` is empty.
    cells: [Option<Mark>; Square::COUNT],
}

impl Board {
    /// Return a board with every cell empty.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Construct a board from raw cell contents.
    pub const fn from_cells(cells: [Option<Mark>; Square::COUNT]) -> Board {
        Board { cells }
    }

    /// Return the mark on the given square, if any.
    #[inline]
    pub fn cell(&self, sq: Square) -> Option<Mark> {
        self.cells[sq.index()]
    }

    /// Return the raw cells in index order.
    #[inline]
    pub fn cells(&self) -> &[Option<Mark>; Square::COUNT] {
        &self.cells
    }

    /// Return `true` if the given square holds no mark.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Put a mark on an empty square.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the square is empty.
    #[inline]
    pub fn place(&mut self, sq: Square, mark: Mark) {
        debug_assert!(self.is_empty(sq), "square {sq} is already occupied");
        self.cells[sq.index()] = Some(mark);
    }

    /// Remove whatever mark is on the square.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.index()] = None;
    }

    /// Return a copy of this board with `mark` placed on `sq`.
    #[inline]
    pub fn with_mark(&self, sq: Square, mark: Mark) -> Board {
        let mut next = *self;
        next.place(sq, mark);
        next
    }

    /// Iterate over the empty squares in ascending index order.
    ///
    /// The iterator works on a snapshot of the cells, so the board may be
    /// modified while it is consumed.
    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + use<> {
        let cells = self.cells;
        Square::all().filter(move |sq| cells[sq.index()].is_none())
    }

    /// Count the cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Return `true` if no empty cell remains.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check that the board could arise from alternating play.
    pub fn validate(&self) -> Result<(), BoardError> {
        let player = self.count(Mark::Player);
        let computer = self.count(Mark::Computer);
        if player.abs_diff(computer) > 1 {
            return Err(BoardError::ImbalancedMarks { player, computer });
        }

        let mut owners = [false; Mark::COUNT];
        for line in Line::ALL {
            if let Some(mark) = line.owner(self) {
                owners[mark.index()] = true;
            }
        }
        if owners.iter().all(|&owned| owned) {
            return Err(BoardError::MultipleWinners);
        }

        Ok(())
    }

    /// Check that `side` may move next under alternating play.
    ///
    /// With equal counts either side may move, since either may have
    /// started. Otherwise the side with fewer marks is to move.
    pub fn validate_turn(&self, side: Mark) -> Result<(), BoardError> {
        if self.count(side) > self.count(!side) {
            return Err(BoardError::WrongSideToMove { side });
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a 3x3 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0u8..3 {
            for col in 0u8..3 {
                let sq = Square::from_index_unchecked(row * 3 + col);
                let c = match board.cell(sq) {
                    Some(mark) => mark.symbol(),
                    None => char::from(b'0' + sq.index() as u8),
                };
                if col < 2 {
                    write!(f, " {c} |")?;
                } else {
                    write!(f, " {c}")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
