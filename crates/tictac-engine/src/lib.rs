//! Move selection for tictac.

pub mod search;

pub use search::minimax::{DRAW_SCORE, LOSS_SCORE, TieBreak, WIN_SCORE};
pub use search::{RootMove, SearchResult, Searcher, best_move, score_moves};
