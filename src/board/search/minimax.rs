use crate::board::{GameState, Move, MoveList};

use super::constants::CHECKMATE;
use super::eval::score_material;
use super::params::SearchConfig;
use super::SearchResult;

/// Fixed-depth minimax over `moves`, no pruning.
///
/// White nodes keep the first move with a strictly greater score, Black
/// nodes the first with a strictly smaller one, so ties go to the earliest
/// move in `moves`. A node without moves is scored by its starting bound
/// (`-CHECKMATE` for White, `CHECKMATE` for Black). Leaves are scored by
/// material only.
///
/// `state` is returned unchanged: every move made is undone before the next
/// candidate is tried.
pub fn minimax(state: &mut GameState, moves: &[Move], config: &SearchConfig) -> SearchResult {
    let depth = config.depth.max(1);
    let mut nodes = 0;
    let (score, best_move) = walk(state, moves, depth, 0, &mut nodes);

    match best_move {
        Some(m) => log::debug!("minimax depth {depth}: best {m} score {score} nodes {nodes}"),
        None => log::debug!("minimax depth {depth}: no move improves on {score}, nodes {nodes}"),
    }

    SearchResult {
        best_move,
        score,
        nodes,
    }
}

/// Score of the current node and the move that achieved it.
fn walk(
    state: &mut GameState,
    moves: &[Move],
    depth: u32,
    ply: u32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;
    if depth == 0 {
        return (score_material(state), None);
    }

    let maximizing = state.white_to_move();
    let mut best_score = if maximizing { -CHECKMATE } else { CHECKMATE };
    let mut best_move = None;

    for m in moves {
        state.make_move(m);
        // Leaves never look at their move list.
        let replies = if depth > 1 {
            state.get_valid_moves()
        } else {
            MoveList::new()
        };
        let (score, _) = walk(state, &replies, depth - 1, ply + 1, nodes);
        if ply == 0 {
            log::trace!("root {m} scores {score}");
        }
        let improves = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(*m);
        }
        state.undo_move();
    }

    (best_score, best_move)
}
