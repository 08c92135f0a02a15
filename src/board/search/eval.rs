use crate::board::GameState;

/// Material balance: White's piece values minus Black's.
///
/// Uses the constant weights from [`Piece::value`](crate::board::Piece::value);
/// no positional or mobility terms.
#[must_use]
pub fn score_material(state: &GameState) -> i32 {
    state
        .rows()
        .iter()
        .flatten()
        .flatten()
        .map(|(color, piece)| color.sign() * piece.value())
        .sum()
}
