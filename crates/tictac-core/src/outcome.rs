//! Win and draw detection.

use std::fmt;

use crate::board::Board;
use crate::line::Line;
use crate::mark::Mark;

/// The state of a game as read off a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Empty cells remain and nobody has three in a row.
    Ongoing,
    /// The player owns a line.
    PlayerWin,
    /// The computer owns a line.
    ComputerWin,
    /// Every cell is filled and nobody owns a line.
    Draw,
}

impl Outcome {
    /// The winning outcome for the given mark.
    #[inline]
    pub const fn win_for(mark: Mark) -> Outcome {
        match mark {
            Mark::Player => Outcome::PlayerWin,
            Mark::Computer => Outcome::ComputerWin,
        }
    }

    /// Return the winning mark, if any.
    #[inline]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerWin => Some(Mark::Player),
            Outcome::ComputerWin => Some(Mark::Computer),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    /// Return `true` for every outcome except [`Outcome::Ongoing`].
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Ongoing => "ongoing",
            Outcome::PlayerWin => "player",
            Outcome::ComputerWin => "computer",
            Outcome::Draw => "draw",
        };
        f.write_str(s)
    }
}

/// Determine the outcome of a board.
///
/// Lines are checked in [`Line::ALL`] order and the first owned line decides
/// the winner, so boards where both marks own a line still evaluate
/// deterministically.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = Line::ALL.into_iter().find_map(|line| line.owner(board)) {
        return Outcome::win_for(mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
