//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for move generation correctness
//! - `make_unmake.rs` - Make/undo move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `search.rs` - Minimax, greedy and random move selection
//! - `proptest.rs` - Property-based tests

mod edge_cases;
mod proptest;

use crate::board::{GameState, Move, Square};

/// The legal move from `from` to `to`; panics if there is none.
pub(super) fn find_move(state: &mut GameState, from: &str, to: &str) -> Move {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    state
        .get_valid_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to)
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}

/// Square from algebraic notation, for brevity.
pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}
