//! Chess board representation and game logic.
//!
//! An 8×8 mailbox position with make/undo history, a pin- and check-aware
//! legal move generator, and a small set of move pickers for an automated
//! player. Supports castling, en passant and promotion (always to a queen).
//!
//! # Example
//! ```
//! use chess_engine::board::GameState;
//!
//! let mut state = GameState::new();
//! let moves = state.get_valid_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use state::GameState;
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Square};

pub use search::{
    find_best_move_greedy, find_best_move_minimax, find_random_move, minimax, score_material,
    SearchConfig, SearchResult,
};
