use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{GameState, Move};

use super::constants::{CHECKMATE, STALEMATE};
use super::eval::score_material;

/// Two-ply greedy choice: the move that leaves the opponent the weakest
/// best reply.
///
/// Candidates are shuffled first, so equal moves are chosen at random.
/// A candidate that leaves the opponent no reply scores `-CHECKMATE` if it
/// mates and `STALEMATE` if it stalemates. A reply that mates the mover
/// scores `CHECKMATE` for the opponent, a reply that stalemates scores
/// `STALEMATE`, anything else the material balance from the opponent's
/// point of view.
pub fn find_best_move_greedy(state: &mut GameState, moves: &[Move]) -> Option<Move> {
    find_best_move_greedy_with(state, moves, &mut rand::thread_rng())
}

/// [`find_best_move_greedy`] with a caller-supplied generator.
pub fn find_best_move_greedy_with<R: Rng + ?Sized>(
    state: &mut GameState,
    moves: &[Move],
    rng: &mut R,
) -> Option<Move> {
    // Opponent's view: positive is good for the side replying.
    let turn_multiplier = if state.white_to_move() { -1 } else { 1 };
    let mut candidates = moves.to_vec();
    candidates.shuffle(rng);

    let mut opponent_min_max_score = CHECKMATE;
    let mut best_move = None;

    for candidate in &candidates {
        state.make_move(candidate);
        let replies = state.get_valid_moves();
        let mut opponent_max_score = if state.stalemate() {
            STALEMATE
        } else {
            -CHECKMATE
        };
        for reply in &replies {
            state.make_move(reply);
            state.get_valid_moves();
            let score = if state.checkmate() {
                CHECKMATE
            } else if state.stalemate() {
                STALEMATE
            } else {
                turn_multiplier * score_material(state)
            };
            opponent_max_score = opponent_max_score.max(score);
            state.undo_move();
        }

        if opponent_max_score < opponent_min_max_score {
            opponent_min_max_score = opponent_max_score;
            best_move = Some(*candidate);
        }
        state.undo_move();
    }

    log::debug!("greedy: best {best_move:?} opponent best reply {opponent_min_max_score}");
    best_move
}
