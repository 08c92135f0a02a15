use super::super::{Color, GameState, Move, MoveList, Piece, Square};
use super::checks::CheckState;
use super::along_pin;

impl GameState {
    /// Advances, double advances, captures and en-passant captures for the
    /// pawn on `from`. Landing on the last rank sets the promotion flag.
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        checks: &CheckState,
        moves: &mut MoveList,
    ) {
        let dir = color.pawn_direction();
        let pin = checks.pin_direction(from);
        let pawn = (color, Piece::Pawn);

        if along_pin(pin, (dir, 0)) {
            if let Some(one) = from.offset(dir, 0) {
                if self.is_empty(one) {
                    moves.push(Move::from_parts(from, one, pawn, None, false, false));
                    if from.0 == color.pawn_start_rank() {
                        if let Some(two) = one.offset(dir, 0) {
                            if self.is_empty(two) {
                                moves.push(Move::from_parts(from, two, pawn, None, false, false));
                            }
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            if !along_pin(pin, (dir, dc)) {
                continue;
            }
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            match self.piece_at(target) {
                Some((c, piece)) if c != color => {
                    moves.push(Move::from_parts(
                        from,
                        target,
                        pawn,
                        Some((c, piece)),
                        false,
                        false,
                    ));
                }
                None if self.en_passant_target == Some(target) => {
                    moves.push(Move::from_parts(
                        from,
                        target,
                        pawn,
                        Some((color.opponent(), Piece::Pawn)),
                        true,
                        false,
                    ));
                }
                _ => {}
            }
        }
    }
}
