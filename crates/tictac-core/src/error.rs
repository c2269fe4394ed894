//! Error types for board notation parsing and board validation.

use std::fmt;

use crate::mark::Mark;

/// Errors that occur when parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The notation does not describe exactly 9 cells.
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
    /// A character other than a mark or an empty-cell symbol appeared.
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails validation.
    InvalidBoard {
        /// The underlying validation error.
        source: BoardError,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongCellCount { found } => {
                write!(f, "expected 9 cells, found {found}")
            }
            ParseError::InvalidCellChar { character } => {
                write!(f, "invalid cell character: '{character}'")
            }
            ParseError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for ParseError {
    fn from(source: BoardError) -> Self {
        ParseError::InvalidBoard { source }
    }
}

/// Errors from validating a [`Board`](crate::board::Board) against alternating play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// One side has placed two or more marks more than the other.
    #[error("mark counts are out of balance: {player} X against {computer} O")]
    ImbalancedMarks {
        /// Number of player marks.
        player: usize,
        /// Number of computer marks.
        computer: usize,
    },
    /// Both sides own a completed line.
    #[error("both sides have three in a row")]
    MultipleWinners,
    /// The given side already has more marks than its opponent.
    #[error("{side} cannot move: it has more marks than its opponent")]
    WrongSideToMove {
        /// The side that was asked to move.
        side: Mark,
    },
}
