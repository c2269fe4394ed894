//! Protocol and session errors.

use tictac_core::{BoardError, Outcome, ParseError, Square};

/// Moves the game session refuses to make.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// A player move arrived while the computer is to move.
    #[error("it is not the player's turn")]
    NotPlayerTurn,

    /// A computer move was requested while the player is to move.
    #[error("it is not the computer's turn")]
    NotComputerTurn,

    /// The game has already finished.
    #[error("game is over: {outcome}")]
    GameOver {
        /// How the game ended.
        outcome: Outcome,
    },

    /// The target square already holds a mark.
    #[error("square {square} is occupied")]
    Occupied {
        /// The occupied square.
        square: Square,
    },

    /// The requested position is inconsistent with alternating play.
    #[error("invalid position: {source}")]
    InvalidPosition {
        /// Why the position was rejected.
        #[from]
        source: BoardError,
    },
}

/// Errors that can occur during protocol handling.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The `position` command has no board.
    #[error("malformed position command: missing board")]
    MalformedPosition,

    /// The board notation could not be parsed.
    #[error("invalid board {board}: {source}")]
    InvalidBoard {
        /// The notation that failed to parse.
        board: String,
        /// Why it failed.
        source: ParseError,
    },

    /// A side name was neither `player` nor `computer`.
    #[error("invalid side: {value}")]
    InvalidSide {
        /// The side string that failed to parse.
        value: String,
    },

    /// The `move` command has no square.
    #[error("move command is missing a square")]
    MissingSquare,

    /// A square was not a number from 0 to 8.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The square string that failed to parse.
        value: String,
    },

    /// The `setoption` command lacks `name` or `value`.
    #[error("malformed setoption command")]
    MalformedOption,

    /// The option name is not recognized.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// The option value is not valid for the option.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// The session refused the command.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
