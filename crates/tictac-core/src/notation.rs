//! Compact board notation: nine cell symbols in row-major order.
//!
//! `X` and `O` are marks; `.`, `_` and `-` are empty cells. Rows may be
//! separated by `/` (e.g. `XX./OO./...`), which is ignored.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::ParseError;
use crate::mark::Mark;
use crate::square::Square;

/// Notation for the empty board.
pub const EMPTY_BOARD: &str = ".........";

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Board, ParseError> {
        let mut cells = [None; Square::COUNT];
        let mut len = 0usize;

        for c in s.trim().chars().filter(|&c| c != '/') {
            let cell = match c {
                '.' | '_' | '-' => None,
                _ => Some(Mark::from_symbol(c).ok_or(ParseError::InvalidCellChar { character: c })?),
            };
            if len < Square::COUNT {
                cells[len] = cell;
            }
            len += 1;
        }

        if len != Square::COUNT {
            return Err(ParseError::WrongCellCount { found: len });
        }

        let board = Board::from_cells(cells);
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            let c = match cell {
                Some(mark) => mark.symbol(),
                None => '.',
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
