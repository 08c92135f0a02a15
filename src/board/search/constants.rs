//! Search constants.

/// Plies searched by [`find_best_move_minimax`](super::find_best_move_minimax).
pub const DEFAULT_DEPTH: u32 = 3;

/// Bound used for a mated side. Larger than any material total.
pub const CHECKMATE: i32 = 1300;

/// Score of a stalemated position.
pub const STALEMATE: i32 = 0;
