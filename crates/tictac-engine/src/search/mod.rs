//! Move selection by full game-tree search.

pub mod minimax;

use tracing::debug;

use tictac_core::{Board, Mark, Square, evaluate};

use minimax::{Eval, SearchContext, TieBreak, minimax, prefers, terminal_score};

/// Result of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best square for the side to move; `None` if the board was already finished.
    pub best_move: Option<Square>,
    /// Minimax score from the computer's perspective: -10, 0 or +10.
    pub score: i32,
    /// Plies until the game ends under best play.
    pub plies: u8,
    /// Boards visited, including the root.
    pub nodes: u64,
}

/// A legal move at the root together with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMove {
    pub square: Square,
    /// Score from the computer's perspective after this move.
    pub score: i32,
    /// Plies until the game ends, counting this move.
    pub plies: u8,
}

impl RootMove {
    fn eval(self) -> Eval {
        Eval {
            score: self.score,
            plies: self.plies,
        }
    }
}

/// Exhaustive minimax searcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    tie_break: TieBreak,
}

impl Searcher {
    /// Create a searcher with the default tie-break.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher with the given tie-break policy.
    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }

    /// The tie-break policy in use.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Change the tie-break policy.
    pub fn set_tie_break(&mut self, tie_break: TieBreak) {
        self.tie_break = tie_break;
    }

    /// Find the best move for `side` on `board`.
    ///
    /// The board must not be finished. Callers check [`evaluate`] first; a
    /// finished board trips a debug assertion and otherwise yields no move
    /// with the terminal score.
    pub fn search(&self, board: &Board, side: Mark) -> SearchResult {
        debug_assert!(
            !evaluate(board).is_terminal(),
            "search called on a finished board {board}"
        );
        self.analyze(board, side).1
    }

    /// Score every legal move for `side`, in ascending square order.
    ///
    /// Returns an empty list for a finished board.
    pub fn score_moves(&self, board: &Board, side: Mark) -> Vec<RootMove> {
        self.analyze(board, side).0
    }

    /// Score every legal move and pick the best one in a single pass.
    ///
    /// The chosen move is the one [`Searcher::select`] returns for the
    /// scored list. A finished board yields no moves and its terminal score.
    pub fn analyze(&self, board: &Board, side: Mark) -> (Vec<RootMove>, SearchResult) {
        if let Some(score) = terminal_score(evaluate(board)) {
            let result = SearchResult {
                best_move: None,
                score,
                plies: 0,
                nodes: 1,
            };
            return (Vec::new(), result);
        }

        let mut ctx = self.context();
        let moves = self.root_moves(board, side, &mut ctx);

        let result = match self.select(side, &moves) {
            Some(mv) => SearchResult {
                best_move: Some(mv.square),
                score: mv.score,
                plies: mv.plies,
                nodes: ctx.nodes,
            },
            None => SearchResult {
                best_move: None,
                score: minimax::DRAW_SCORE,
                plies: 0,
                nodes: ctx.nodes,
            },
        };

        debug!(
            side = %side,
            best = ?result.best_move.map(Square::index),
            score = result.score,
            nodes = result.nodes,
            "search complete"
        );
        (moves, result)
    }

    /// Pick the best of already scored root moves for `side`.
    ///
    /// `moves` is expected in ascending square order. Returns `None` for an
    /// empty list.
    pub fn select(&self, side: Mark, moves: &[RootMove]) -> Option<RootMove> {
        let mut best: Option<RootMove> = None;
        for &mv in moves {
            let replace = match best {
                None => true,
                Some(current) => prefers(side, self.tie_break, mv.eval(), current.eval()),
            };
            if replace {
                best = Some(mv);
            }
        }
        best
    }

    fn context(&self) -> SearchContext {
        SearchContext {
            nodes: 0,
            tie_break: self.tie_break,
        }
    }

    fn root_moves(&self, board: &Board, side: Mark, ctx: &mut SearchContext) -> Vec<RootMove> {
        ctx.nodes += 1;

        // The caller's board is never touched; trial marks go on this copy.
        let mut scratch = *board;
        let mut moves = Vec::with_capacity(Square::COUNT);
        for sq in scratch.empty_squares() {
            scratch.place(sq, side);
            let (_, child) = minimax(&mut scratch, !side, ctx);
            scratch.clear(sq);

            moves.push(RootMove {
                square: sq,
                score: child.score,
                plies: child.plies + 1,
            });
        }
        moves
    }
}

/// Find the best move with the default searcher.
pub fn best_move(board: &Board, side: Mark) -> SearchResult {
    Searcher::new().search(board, side)
}

/// Score every legal move with the default searcher.
pub fn score_moves(board: &Board, side: Mark) -> Vec<RootMove> {
    Searcher::new().score_moves(board, side)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_moves_cover_empty_squares() {
        let board: Board = "X...O....".parse().unwrap();
        let moves = score_moves(&board, Mark::Player);
        let squares: Vec<usize> = moves.iter().map(|m| m.square.index()).collect();
        assert_eq!(squares, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn best_move_is_among_root_moves() {
        let board: Board = "X........".parse().unwrap();
        let result = best_move(&board, Mark::Computer);
        let moves = score_moves(&board, Mark::Computer);
        let chosen = moves
            .iter()
            .find(|m| Some(m.square) == result.best_move)
            .expect("best move must be a root move");
        assert_eq!(chosen.score, result.score);
        assert!(moves.iter().all(|m| m.score <= result.score));
    }

    #[test]
    fn corner_opening_answered_by_center() {
        // Every reply except the center loses against a corner opening.
        let board: Board = "X........".parse().unwrap();
        let result = best_move(&board, Mark::Computer);
        assert_eq!(result.best_move, Some(Square::CENTER));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn default_takes_first_extreme_in_ascending_order() {
        // Squares 2 and 5 both win for O; 2 comes first.
        let board: Board = "XX.OO....".parse().unwrap();
        let moves = score_moves(&board, Mark::Computer);
        let top = moves.iter().map(|m| m.score).max().unwrap();
        let first = moves.iter().find(|m| m.score == top).unwrap();

        let result = best_move(&board, Mark::Computer);
        assert_eq!(result.best_move, Some(first.square));
        assert_eq!(result.best_move, Some(Square::TOP_RIGHT));
        assert_eq!(result.score, 10);
    }

    #[test]
    fn analyze_selects_from_its_own_moves() {
        let board: Board = "XX.OO....".parse().unwrap();
        for tie_break in [TieBreak::Ascending, TieBreak::Quickest] {
            let searcher = Searcher::with_tie_break(tie_break);
            let (moves, result) = searcher.analyze(&board, Mark::Computer);
            let selected = searcher.select(Mark::Computer, &moves).unwrap();
            assert_eq!(result.best_move, Some(selected.square));
            assert_eq!(result.score, selected.score);
            assert_eq!(result, searcher.search(&board, Mark::Computer));
        }
    }

    #[test]
    fn analyze_visits_the_tree_once() {
        // Root, X6 (wins), X7 with its four-node subtree, X8 (wins).
        let board: Board = "XOXOXO...".parse().unwrap();
        let (moves, result) = Searcher::new().analyze(&board, Mark::Player);
        assert_eq!(moves.len(), 3);
        assert_eq!(result.nodes, 8);
        assert_eq!(result.best_move, Some(Square::BOTTOM_LEFT));
        assert_eq!(result.score, -10);
    }

    #[test]
    fn select_on_empty_list() {
        assert_eq!(Searcher::new().select(Mark::Computer, &[]), None);
    }

    #[test]
    fn finished_board_has_no_moves() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert!(score_moves(&board, Mark::Computer).is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "finished board")]
    fn search_on_finished_board_asserts() {
        let board: Board = "XXXOO....".parse().unwrap();
        best_move(&board, Mark::Computer);
    }

    #[test]
    fn searcher_tie_break_accessors() {
        let mut searcher = Searcher::new();
        assert_eq!(searcher.tie_break(), TieBreak::Ascending);
        searcher.set_tie_break(TieBreak::Quickest);
        assert_eq!(searcher.tie_break(), TieBreak::Quickest);
        assert_eq!(
            Searcher::with_tie_break(TieBreak::Quickest).tie_break(),
            TieBreak::Quickest
        );
    }
}
