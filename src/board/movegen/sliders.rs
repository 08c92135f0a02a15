use super::super::{Color, GameState, Move, MoveList, Piece, Square};
use super::checks::CheckState;
use super::along_pin;

impl GameState {
    /// Walk each direction from `from` until the edge, a friendly piece
    /// (excluded) or an enemy piece (included).
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        (color, piece): (Color, Piece),
        directions: &[(isize, isize)],
        checks: &CheckState,
        moves: &mut MoveList,
    ) {
        let pin = checks.pin_direction(from);
        for &(dr, dc) in directions {
            if !along_pin(pin, (dr, dc)) {
                continue;
            }
            let mut sq = from;
            while let Some(to) = sq.offset(dr, dc) {
                sq = to;
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::from_parts(from, to, (color, piece), None, false, false));
                    }
                    Some((c, _)) if c == color => break,
                    captured => {
                        moves.push(Move::from_parts(
                            from,
                            to,
                            (color, piece),
                            captured,
                            false,
                            false,
                        ));
                        break;
                    }
                }
            }
        }
    }
}
