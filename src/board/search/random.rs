use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Move;

/// Pick a move uniformly at random. `None` only for an empty list.
#[must_use]
pub fn find_random_move(moves: &[Move]) -> Option<Move> {
    find_random_move_with(moves, &mut rand::thread_rng())
}

/// [`find_random_move`] with a caller-supplied generator.
pub fn find_random_move_with<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    moves.choose(rng).copied()
}
