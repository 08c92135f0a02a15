//! Move type.

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;
use crate::board::GameState;

/// A single move, captured as a value against the position it was built from.
///
/// Equality and hashing cover the start and end squares plus the three
/// special-move flags. The captured piece is implied by the position at
/// apply time and does not take part in comparisons.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece_moved: (Color, Piece),
    pub piece_captured: Option<(Color, Piece)>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_pawn_promotion: bool,
}

impl Move {
    /// Build a plain move from `from` to `to` against `state`.
    ///
    /// Returns `None` when `from` is empty.
    #[must_use]
    pub fn new(from: Square, to: Square, state: &GameState) -> Option<Self> {
        Move::with_flags(from, to, state, false, false)
    }

    /// Build a move with explicit en-passant / castle flags.
    ///
    /// The promotion flag is derived: a pawn landing on its last rank.
    #[must_use]
    pub fn with_flags(
        from: Square,
        to: Square,
        state: &GameState,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Option<Self> {
        let piece_moved = state.piece_at(from)?;
        let piece_captured = if is_en_passant {
            Some((piece_moved.0.opponent(), Piece::Pawn))
        } else {
            state.piece_at(to)
        };
        Some(Move::from_parts(
            from,
            to,
            piece_moved,
            piece_captured,
            is_en_passant,
            is_castle,
        ))
    }

    #[inline]
    pub(crate) fn from_parts(
        from: Square,
        to: Square,
        piece_moved: (Color, Piece),
        piece_captured: Option<(Color, Piece)>,
        is_en_passant: bool,
        is_castle: bool,
    ) -> Self {
        let (color, piece) = piece_moved;
        let is_pawn_promotion = piece == Piece::Pawn && to.0 == color.pawn_promotion_rank();
        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            is_en_passant,
            is_castle,
            is_pawn_promotion,
        }
    }

    /// Color of the side making this move
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.piece_moved.0
    }

    /// Kind of the moving piece
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Piece {
        self.piece_moved.1
    }

    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Returns true if this is a king-side castle
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.is_castle && self.to.1 > self.from.1
    }

    /// Start and end squares as a 4-character string, e.g. `"e2e4"`.
    #[must_use]
    pub fn chess_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.to == other.to
            && self.is_en_passant == other.is_en_passant
            && self.is_castle == other.is_castle
            && self.is_pawn_promotion == other.is_pawn_promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
        self.is_en_passant.hash(state);
        self.is_castle.hash(state);
        self.is_pawn_promotion.hash(state);
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({}{} {}",
            self.from,
            self.to,
            self.piece_moved.1.to_fen_char(self.piece_moved.0)
        )?;
        if let Some((color, piece)) = self.piece_captured {
            write!(f, "x{}", piece.to_fen_char(color))?;
        }
        if self.is_pawn_promotion {
            write!(f, "=Q")?;
        }
        if self.is_castle {
            write!(f, " castle")?;
        }
        if self.is_en_passant {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
