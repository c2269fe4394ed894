//! Exhaustive game counting for rule verification.

use crate::board::Board;
use crate::mark::Mark;
use crate::outcome::{Outcome, evaluate};

/// Number of finished games reachable from a position, split by result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameCounts {
    pub player_wins: u64,
    pub computer_wins: u64,
    pub draws: u64,
}

impl GameCounts {
    /// Total number of finished games.
    pub fn total(&self) -> u64 {
        self.player_wins + self.computer_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::ComputerWin => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Ongoing => {}
        }
    }
}

/// Play out every legal continuation and tally how each game ends.
///
/// A board that is already finished counts as a single game.
pub fn count_games(board: &Board, side_to_move: Mark) -> GameCounts {
    let mut scratch = *board;
    let mut counts = GameCounts::default();
    walk(&mut scratch, side_to_move, &mut counts);
    counts
}

fn walk(board: &mut Board, side_to_move: Mark, counts: &mut GameCounts) {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        counts.record(outcome);
        return;
    }

    for sq in board.empty_squares() {
        board.place(sq, side_to_move);
        walk(board, !side_to_move, counts);
        board.clear(sq);
    }
}
