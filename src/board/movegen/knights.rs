use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Color, GameState, Move, MoveList, Piece, Square};
use super::checks::CheckState;

impl GameState {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        color: Color,
        checks: &CheckState,
        moves: &mut MoveList,
    ) {
        // A pinned knight can never stay on its pin line.
        if checks.pin_direction(from).is_some() {
            return;
        }
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            match self.piece_at(to) {
                Some((c, _)) if c == color => {}
                captured => moves.push(Move::from_parts(
                    from,
                    to,
                    (color, Piece::Knight),
                    captured,
                    false,
                    false,
                )),
            }
        }
    }
}
