//! Exhaustive minimax without pruning.

use tictac_core::{Board, Mark, Outcome, Square, evaluate};

/// Score of a position the computer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// Score of a position the player has won.
pub const LOSS_SCORE: i32 = -10;

/// How to choose between moves that reach the same minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Take the first extreme score in ascending square order.
    #[default]
    Ascending,
    /// Prefer the quickest win and the slowest loss, then the lowest square.
    Quickest,
}

impl TieBreak {
    /// All policies, default first.
    pub const ALL: [TieBreak; 2] = [TieBreak::Ascending, TieBreak::Quickest];

    /// Lowercase name, as used in option values.
    pub const fn name(self) -> &'static str {
        match self {
            TieBreak::Ascending => "ascending",
            TieBreak::Quickest => "quickest",
        }
    }

    /// Parse a policy name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<TieBreak> {
        TieBreak::ALL
            .into_iter()
            .find(|tie_break| tie_break.name().eq_ignore_ascii_case(name))
    }
}

/// Minimax value of a position together with the game length behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Eval {
    /// Score from the computer's perspective.
    pub score: i32,
    /// Plies until the game ends along the chosen line.
    pub plies: u8,
}

/// Mutable state threaded through one search.
pub(super) struct SearchContext {
    pub nodes: u64,
    pub tie_break: TieBreak,
}

/// Map a finished game to its score. `None` while the game is ongoing.
#[inline]
pub fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::PlayerWin => Some(LOSS_SCORE),
        Outcome::ComputerWin => Some(WIN_SCORE),
        Outcome::Draw => Some(DRAW_SCORE),
        Outcome::Ongoing => None,
    }
}

/// Minimax over `board` with `side` to move.
///
/// Each trial mark is cleared before the next sibling is tried and before
/// returning, so `board` is restored on every path.
pub(super) fn minimax(board: &mut Board, side: Mark, ctx: &mut SearchContext) -> (Option<Square>, Eval) {
    ctx.nodes += 1;

    if let Some(score) = terminal_score(evaluate(board)) {
        return (None, Eval { score, plies: 0 });
    }

    let mut best: Option<(Square, Eval)> = None;
    for sq in board.empty_squares() {
        board.place(sq, side);
        let (_, child) = minimax(board, !side, ctx);
        board.clear(sq);

        let candidate = Eval {
            score: child.score,
            plies: child.plies + 1,
        };
        let replace = match best {
            None => true,
            Some((_, current)) => prefers(side, ctx.tie_break, candidate, current),
        };
        if replace {
            best = Some((sq, candidate));
        }
    }

    match best {
        Some((sq, eval)) => (Some(sq), eval),
        // Unreachable: a board with no empty cell evaluates as a draw above.
        None => (None, Eval { score: DRAW_SCORE, plies: 0 }),
    }
}

/// Return `true` if `candidate` should replace `current` for the side to move.
///
/// Comparisons are strict so that, among fully equal candidates, the one
/// found first (lowest square) is kept.
pub(super) fn prefers(side: Mark, tie_break: TieBreak, candidate: Eval, current: Eval) -> bool {
    let (better, winning, losing) = match side {
        Mark::Computer => (
            candidate.score > current.score,
            candidate.score > DRAW_SCORE,
            candidate.score < DRAW_SCORE,
        ),
        Mark::Player => (
            candidate.score < current.score,
            candidate.score < DRAW_SCORE,
            candidate.score > DRAW_SCORE,
        ),
    };

    if better {
        return true;
    }
    if candidate.score != current.score || tie_break == TieBreak::Ascending {
        return false;
    }

    if winning {
        candidate.plies < current.plies
    } else if losing {
        candidate.plies > current.plies
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(score: i32, plies: u8) -> Eval {
        Eval { score, plies }
    }

    #[test]
    fn terminal_scores() {
        assert_eq!(terminal_score(Outcome::PlayerWin), Some(-10));
        assert_eq!(terminal_score(Outcome::ComputerWin), Some(10));
        assert_eq!(terminal_score(Outcome::Draw), Some(0));
        assert_eq!(terminal_score(Outcome::Ongoing), None);
    }

    #[test]
    fn computer_maximizes_player_minimizes() {
        assert!(prefers(Mark::Computer, TieBreak::Ascending, eval(10, 5), eval(0, 1)));
        assert!(!prefers(Mark::Computer, TieBreak::Ascending, eval(-10, 1), eval(0, 1)));
        assert!(prefers(Mark::Player, TieBreak::Ascending, eval(-10, 5), eval(0, 1)));
        assert!(!prefers(Mark::Player, TieBreak::Ascending, eval(10, 1), eval(0, 1)));
    }

    #[test]
    fn ascending_keeps_first_on_equal_score() {
        assert!(!prefers(Mark::Computer, TieBreak::Ascending, eval(10, 1), eval(10, 3)));
        assert!(!prefers(Mark::Player, TieBreak::Ascending, eval(-10, 1), eval(-10, 3)));
    }

    #[test]
    fn quickest_prefers_short_wins_and_long_losses() {
        assert!(prefers(Mark::Computer, TieBreak::Quickest, eval(10, 1), eval(10, 3)));
        assert!(!prefers(Mark::Computer, TieBreak::Quickest, eval(10, 3), eval(10, 1)));
        assert!(prefers(Mark::Computer, TieBreak::Quickest, eval(-10, 4), eval(-10, 2)));
        assert!(prefers(Mark::Player, TieBreak::Quickest, eval(-10, 1), eval(-10, 3)));
        assert!(prefers(Mark::Player, TieBreak::Quickest, eval(10, 4), eval(10, 2)));
    }

    #[test]
    fn quickest_keeps_first_draw() {
        assert!(!prefers(Mark::Computer, TieBreak::Quickest, eval(0, 1), eval(0, 5)));
        assert!(!prefers(Mark::Player, TieBreak::Quickest, eval(0, 5), eval(0, 1)));
    }

    #[test]
    fn ascending_is_the_default() {
        assert_eq!(TieBreak::default(), TieBreak::Ascending);
        assert_eq!(TieBreak::ALL[0], TieBreak::default());
    }

    #[test]
    fn tie_break_names() {
        assert_eq!(TieBreak::from_name("Quickest"), Some(TieBreak::Quickest));
        assert_eq!(TieBreak::from_name("ascending"), Some(TieBreak::Ascending));
        assert_eq!(TieBreak::from_name("fastest"), None);
        assert_eq!(TieBreak::Quickest.name(), "quickest");
    }

    #[test]
    fn minimax_restores_board() {
        let mut board: Board = "X...O...X".parse().unwrap();
        let before = board;
        let mut ctx = SearchContext {
            nodes: 0,
            tie_break: TieBreak::Quickest,
        };
        minimax(&mut board, Mark::Computer, &mut ctx);
        assert_eq!(board, before);
        assert!(ctx.nodes > 1);
    }

    #[test]
    fn terminal_board_returns_no_square() {
        let mut board: Board = "XXXOO....".parse().unwrap();
        let mut ctx = SearchContext {
            nodes: 0,
            tie_break: TieBreak::Ascending,
        };
        let (sq, eval) = minimax(&mut board, Mark::Computer, &mut ctx);
        assert_eq!(sq, None);
        assert_eq!(eval, Eval { score: LOSS_SCORE, plies: 0 });
        assert_eq!(ctx.nodes, 1);
    }
}
