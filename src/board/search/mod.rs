//! Move selection for the automated player.
//!
//! - [`find_random_move`]: uniform choice, used as a fallback
//! - [`find_best_move_minimax`]: fixed-depth minimax over the legal-move tree
//! - [`find_best_move_greedy`]: two-ply shuffle-and-minimise evaluator
//!
//! All searches borrow the [`GameState`] exclusively for the duration of the
//! call and hand it back exactly as they found it.

mod constants;
mod eval;
mod greedy;
mod minimax;
mod params;
mod random;

pub use constants::{CHECKMATE, DEFAULT_DEPTH, STALEMATE};
pub use eval::score_material;
pub use greedy::{find_best_move_greedy, find_best_move_greedy_with};
pub use minimax::minimax;
pub use params::SearchConfig;
pub use random::{find_random_move, find_random_move_with};

use super::{GameState, Move};

/// Outcome of a minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// First move reaching `score`; `None` if no move beat the starting bound
    pub best_move: Option<Move>,
    /// Minimax value of the root, White positive
    pub score: i32,
    /// Nodes visited, root included
    pub nodes: u64,
}

/// Best move for the side to move at [`DEFAULT_DEPTH`] plies.
///
/// Returns `None` when every move loses to a forced mate inside the horizon
/// (or `moves` is empty); callers fall back to [`find_random_move`].
pub fn find_best_move_minimax(state: &mut GameState, moves: &[Move]) -> Option<Move> {
    minimax(state, moves, &SearchConfig::default()).best_move
}
