pub mod board;

pub use board::{Color, GameState, Move, Piece, Square};
