//! Core chess types.
//!
//! This module contains the fundamental types used throughout the chess engine:
//! - `Piece` and `Color` - chess piece kinds and colors
//! - `Square` - (row, col) board coordinate
//! - `Move` - move value with its special-move flags
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

/// Ordered list of moves as returned by the generator.
pub type MoveList = Vec<Move>;
