use super::super::attack_tables::KING_TARGETS;
use super::super::{Color, GameState, Move, MoveList, Piece, Square};

impl GameState {
    /// One-step king moves that do not land on an attacked square.
    ///
    /// Safety is probed by re-running the ray caster with the king placed on
    /// the destination; the tracked king square is left alone.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.as_index()] {
            let captured = match self.piece_at(to) {
                Some((c, _)) if c == color => continue,
                other => other,
            };
            if !self.pins_and_checks_at(to, color).in_check() {
                moves.push(Move::from_parts(
                    from,
                    to,
                    (color, Piece::King),
                    captured,
                    false,
                    false,
                ));
            }
        }
    }

    /// Castling moves for a king on `king_sq` that is not in check.
    ///
    /// Needs the right, empty squares up to the rook and no attack on the
    /// squares the king crosses or stands on.
    pub(crate) fn generate_castle_moves(
        &self,
        king_sq: Square,
        color: Color,
        moves: &mut MoveList,
    ) {
        let row = color.back_rank();
        if king_sq != Square(row, 4) || self.is_attacked_for(king_sq, color) {
            return;
        }
        let rook = Some((color, Piece::Rook));

        if self.castling_rights.has(color, true)
            && self.squares[row][7] == rook
            && self.squares[row][5].is_none()
            && self.squares[row][6].is_none()
            && !self.is_attacked_for(Square(row, 5), color)
            && !self.is_attacked_for(Square(row, 6), color)
        {
            moves.push(Move::from_parts(
                king_sq,
                Square(row, 6),
                (color, Piece::King),
                None,
                false,
                true,
            ));
        }

        if self.castling_rights.has(color, false)
            && self.squares[row][0] == rook
            && self.squares[row][3].is_none()
            && self.squares[row][2].is_none()
            && self.squares[row][1].is_none()
            && !self.is_attacked_for(Square(row, 3), color)
            && !self.is_attacked_for(Square(row, 2), color)
        {
            moves.push(Move::from_parts(
                king_sq,
                Square(row, 2),
                (color, Piece::King),
                None,
                false,
                true,
            ));
        }
    }

    #[inline]
    fn is_attacked_for(&self, sq: Square, color: Color) -> bool {
        self.pins_and_checks_at(sq, color).in_check()
    }
}
