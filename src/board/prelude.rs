//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_engine::board::prelude::*;
//!
//! let mut state = GameState::new();
//! let moves = state.get_valid_moves();
//! assert!(find_random_move(&moves).is_some());
//! ```

pub use super::{
    find_best_move_minimax, find_random_move, Color, GameState, Move, MoveList, Piece,
    SearchConfig, Square,
};
