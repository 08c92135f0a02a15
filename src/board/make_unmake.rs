use super::{GameState, Move, Piece, Square};

/// Rook (from, to) columns for a castle, keyed by the king's destination.
#[inline]
fn castle_rook_cols(m: &Move) -> (usize, usize) {
    if m.is_castle_kingside() {
        (m.to.1 + 1, m.to.1 - 1)
    } else {
        (m.to.1 - 2, m.to.1 + 1)
    }
}

impl GameState {
    /// Apply `m` to the position.
    ///
    /// `m` must have been generated against (or built from) the current
    /// position. Pushes the move, a castling-rights snapshot and the new
    /// en-passant target so [`GameState::undo_move`] can restore all three.
    pub fn make_move(&mut self, m: &Move) {
        let (color, piece) = m.piece_moved;

        self.clear_square(m.from);
        if m.is_pawn_promotion {
            self.set_piece(m.to, color, Piece::Queen);
        } else {
            self.set_piece(m.to, color, piece);
        }

        if m.is_en_passant {
            self.clear_square(Square(m.from.0, m.to.1));
        }

        if m.is_castle {
            let (rook_from, rook_to) = castle_rook_cols(m);
            let row = m.to.0;
            self.squares[row][rook_to] = self.squares[row][rook_from];
            self.squares[row][rook_from] = None;
        }

        if piece == Piece::King {
            self.king_squares[color.index()] = m.to;
        }

        self.move_log.push(*m);
        self.white_to_move = !self.white_to_move;

        self.en_passant_target = if piece == Piece::Pawn && m.from.0.abs_diff(m.to.0) == 2 {
            Some(Square((m.from.0 + m.to.0) / 2, m.from.1))
        } else {
            None
        };
        self.en_passant_log.push(self.en_passant_target);

        self.update_castle_rights(m);
        self.castle_rights_log.push(self.castling_rights);

        log::trace!("make {m:?}");
    }

    /// Reverse the most recent [`GameState::make_move`].
    ///
    /// Does nothing on an empty history. Always clears the checkmate and
    /// stalemate flags. Returns the move that was taken back.
    pub fn undo_move(&mut self) -> Option<Move> {
        let m = self.move_log.pop()?;
        let (color, piece) = m.piece_moved;

        self.squares[m.from.0][m.from.1] = Some(m.piece_moved);
        self.squares[m.to.0][m.to.1] = m.piece_captured;
        self.white_to_move = !self.white_to_move;

        if piece == Piece::King {
            self.king_squares[color.index()] = m.from;
        }

        if m.is_en_passant {
            self.clear_square(m.to);
            self.squares[m.from.0][m.to.1] = m.piece_captured;
        }

        if m.is_castle {
            let (rook_from, rook_to) = castle_rook_cols(&m);
            let row = m.to.0;
            self.squares[row][rook_from] = self.squares[row][rook_to];
            self.squares[row][rook_to] = None;
        }

        self.en_passant_log.pop();
        self.en_passant_target = self.en_passant_log.last().copied().flatten();

        self.castle_rights_log.pop();
        if let Some(&rights) = self.castle_rights_log.last() {
            self.castling_rights = rights;
        }

        self.checkmate = false;
        self.stalemate = false;

        log::trace!("undo {m:?}");
        Some(m)
    }

    /// Revoke the castling rights `m` destroys.
    ///
    /// A king move drops both of its color's rights. A rook leaving its home
    /// corner drops that side's right, and so does capturing a rook on its
    /// home corner. Only the piece kind and the squares are inspected.
    pub(crate) fn update_castle_rights(&mut self, m: &Move) {
        let (color, piece) = m.piece_moved;
        match piece {
            Piece::King => self.castling_rights.remove_color(color),
            Piece::Rook if m.from.0 == color.back_rank() => match m.from.1 {
                0 => self.castling_rights.remove(color, false),
                7 => self.castling_rights.remove(color, true),
                _ => {}
            },
            _ => {}
        }

        if let Some((captured_color, Piece::Rook)) = m.piece_captured {
            if m.to.0 == captured_color.back_rank() {
                match m.to.1 {
                    0 => self.castling_rights.remove(captured_color, false),
                    7 => self.castling_rights.remove(captured_color, true),
                    _ => {}
                }
            }
        }
    }
}
