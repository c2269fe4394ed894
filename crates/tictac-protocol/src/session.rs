//! Game session: board ownership, turn order, and user-facing messages.

use tictac_core::{Board, Mark, Outcome, Square, evaluate};
use tictac_engine::{RootMove, SearchResult, Searcher, TieBreak};

use crate::error::SessionError;

/// Settings that shape a session, adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Who moves first after a reset.
    pub first_turn: Mark,
    /// How the computer chooses between equally scored moves.
    pub tie_break: TieBreak,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            first_turn: Mark::Player,
            tie_break: TieBreak::default(),
        }
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    ComputerTurn,
    GameOver(Outcome),
}

impl Phase {
    /// The phase after a move, given the resulting outcome and the side now to move.
    fn after(outcome: Outcome, to_move: Mark) -> Phase {
        if outcome.is_terminal() {
            Phase::GameOver(outcome)
        } else {
            Phase::to_move(to_move)
        }
    }

    fn to_move(mark: Mark) -> Phase {
        match mark {
            Mark::Player => Phase::PlayerTurn,
            Mark::Computer => Phase::ComputerTurn,
        }
    }

    /// The side to move, or `None` once the game is over.
    pub fn side_to_move(self) -> Option<Mark> {
        match self {
            Phase::PlayerTurn => Some(Mark::Player),
            Phase::ComputerTurn => Some(Mark::Computer),
            Phase::GameOver(_) => None,
        }
    }
}

/// One game between the player and the computer.
///
/// The session owns the board; the evaluator and searcher only ever see it
/// by shared reference.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    phase: Phase,
    config: SessionConfig,
    searcher: Searcher,
    /// No move has been made since the last reset.
    fresh: bool,
}

impl Session {
    /// Start a new game with the given configuration.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::empty(),
            phase: Phase::to_move(config.first_turn),
            config,
            searcher: Searcher::with_tie_break(config.tie_break),
            fresh: true,
        }
    }

    /// Clear the board and hand the first turn to the configured side.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.phase = Phase::to_move(self.config.first_turn);
        self.fresh = true;
    }

    /// The current configuration.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Change the configuration. The first turn takes effect on the next reset.
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
        self.searcher.set_tie_break(config.tie_break);
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Install an arbitrary board with the given side to move.
    ///
    /// `to_move` must be consistent with the mark counts; on error the
    /// session is left unchanged.
    pub fn set_position(&mut self, board: Board, to_move: Mark) -> Result<Phase, SessionError> {
        board.validate_turn(to_move)?;
        self.board = board;
        self.phase = Phase::after(evaluate(&board), to_move);
        self.fresh = board == Board::empty();
        Ok(self.phase)
    }

    /// Apply the player's move.
    pub fn play_player(&mut self, square: Square) -> Result<Phase, SessionError> {
        match self.phase {
            Phase::PlayerTurn => {}
            Phase::ComputerTurn => return Err(SessionError::NotPlayerTurn),
            Phase::GameOver(outcome) => return Err(SessionError::GameOver { outcome }),
        }
        self.apply(square, Mark::Player)?;
        Ok(self.phase)
    }

    /// Search for and apply the computer's move.
    pub fn play_computer(&mut self) -> Result<SearchResult, SessionError> {
        match self.phase {
            Phase::ComputerTurn => {}
            Phase::PlayerTurn => return Err(SessionError::NotComputerTurn),
            Phase::GameOver(outcome) => return Err(SessionError::GameOver { outcome }),
        }

        let result = self.searcher.search(&self.board, Mark::Computer);
        if let Some(square) = result.best_move {
            self.apply(square, Mark::Computer)?;
        }
        Ok(result)
    }

    /// Score every move for the side to move without playing any of them.
    pub fn analyze(&self) -> Result<(Vec<RootMove>, SearchResult), SessionError> {
        match self.phase.side_to_move() {
            Some(side) => Ok(self.searcher.analyze(&self.board, side)),
            None => Err(SessionError::GameOver {
                outcome: evaluate(&self.board),
            }),
        }
    }

    /// Text describing the current state, as shown to the player.
    pub fn message(&self) -> &'static str {
        match self.phase {
            Phase::PlayerTurn if self.fresh => "First turn is of Player X",
            Phase::PlayerTurn => "Player X's turn",
            Phase::ComputerTurn => "Computer's turn",
            Phase::GameOver(outcome) => match outcome.winner() {
                Some(Mark::Player) => "You Win!",
                Some(Mark::Computer) => "You Lose!",
                None => "It's a Tie!",
            },
        }
    }

    fn apply(&mut self, square: Square, mark: Mark) -> Result<(), SessionError> {
        if !self.board.is_empty(square) {
            return Err(SessionError::Occupied { square });
        }
        self.board.place(square, mark);
        self.fresh = false;
        self.phase = Phase::after(evaluate(&self.board), !mark);
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
