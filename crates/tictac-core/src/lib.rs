//! Core Tic-Tac-Toe types: board representation, marks, winning lines, and game rules.

mod board;
mod error;
mod line;
mod mark;
mod notation;
mod outcome;
pub mod perft;
mod square;

pub use board::{Board, PrettyBoard};
pub use error::{BoardError, ParseError};
pub use line::Line;
pub use mark::Mark;
pub use notation::EMPTY_BOARD;
pub use outcome::{Outcome, evaluate};
pub use square::Square;
