//! Legal move generation.
//!
//! Pins and checks are found once per call by ray casting from the king,
//! then each piece generates only moves that respect its pin. Check evasion
//! filters the result down to king moves plus blocks and captures of the
//! checker.

mod checks;
mod kings;
mod knights;
mod pawns;
mod sliders;

use checks::CheckState;

use super::attack_tables::{ALL_DIRECTIONS, DIAGONALS, ORTHOGONALS};
use super::{Color, GameState, Move, MoveList, Piece, Square};

/// True if a piece pinned along `pin` may step in `direction`.
#[inline]
pub(super) fn along_pin(pin: Option<(isize, isize)>, direction: (isize, isize)) -> bool {
    match pin {
        None => true,
        Some(p) => p == direction || p == (-direction.0, -direction.1),
    }
}

impl GameState {
    /// Every legal move for the side to move, in board order (row 0 first),
    /// castling last.
    ///
    /// Sets `checkmate` or `stalemate` when the list is empty and clears both
    /// otherwise.
    pub fn get_valid_moves(&mut self) -> MoveList {
        let color = self.side_to_move();
        let king_sq = self.king_square(color);
        let checks = self.pins_and_checks_at(king_sq, color);

        let mut moves = if checks.is_double_check() {
            let mut moves = MoveList::new();
            self.generate_king_moves(king_sq, color, &mut moves);
            moves
        } else if let Some(check) = checks.checks.first() {
            let blocks = self.blocking_squares(king_sq, check);
            let checker = check.square;
            self.generate_pseudo_moves(color, &checks)
                .into_iter()
                .filter(|m| {
                    m.piece() == Piece::King
                        || blocks.contains(&m.to)
                        || (m.is_en_passant && Square(m.from.0, m.to.1) == checker)
                })
                .collect()
        } else {
            let mut moves = self.generate_pseudo_moves(color, &checks);
            self.generate_castle_moves(king_sq, color, &mut moves);
            moves
        };

        // Both pawns leave their squares during en passant, which a pin scan
        // cannot see; confirm those few moves by playing them.
        if moves.iter().any(|m| m.is_en_passant) {
            moves.retain(|m| !m.is_en_passant || self.leaves_king_safe(m));
        }

        let in_check = checks.in_check();
        self.checkmate = moves.is_empty() && in_check;
        self.stalemate = moves.is_empty() && !in_check;
        moves
    }

    /// Pseudo-legal moves for `color`, pins respected, castling excluded.
    ///
    /// Board squares are scanned row by row and each piece dispatches on its
    /// kind.
    pub(crate) fn generate_pseudo_moves(&self, color: Color, checks: &CheckState) -> MoveList {
        let mut moves = MoveList::with_capacity(48);
        for row in 0..8 {
            for col in 0..8 {
                if let Some((c, piece)) = self.squares[row][col] {
                    if c == color {
                        self.generate_piece_moves(Square(row, col), (c, piece), checks, &mut moves);
                    }
                }
            }
        }
        moves
    }

    fn generate_piece_moves(
        &self,
        from: Square,
        (color, piece): (Color, Piece),
        checks: &CheckState,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, checks, moves),
            Piece::Knight => self.generate_knight_moves(from, color, checks, moves),
            Piece::Bishop => {
                self.generate_sliding_moves(from, (color, piece), &DIAGONALS, checks, moves);
            }
            Piece::Rook => {
                self.generate_sliding_moves(from, (color, piece), &ORTHOGONALS, checks, moves);
            }
            Piece::Queen => {
                self.generate_sliding_moves(from, (color, piece), &ALL_DIRECTIONS, checks, moves);
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Play `m`, test the mover's king, and take it back.
    fn leaves_king_safe(&mut self, m: &Move) -> bool {
        let color = m.color();
        self.make_move(m);
        let safe = !self
            .pins_and_checks_at(self.king_square(color), color)
            .in_check();
        self.undo_move();
        safe
    }

    /// Number of leaf positions `depth` plies below the current one.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.get_valid_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in &moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }
        nodes
    }
}
