//! Pin and check detection by ray casting from the king.

use super::super::attack_tables::{ALL_DIRECTIONS, KNIGHT_TARGETS};
use super::super::{Color, GameState, Piece, Square};

/// A friendly piece that may only move along `direction` or its reverse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pin {
    pub(crate) square: Square,
    /// Step from the king toward the pinned piece.
    pub(crate) direction: (isize, isize),
}

/// An enemy piece giving check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Check {
    pub(crate) square: Square,
    /// Step from the king toward the checker (the jump itself for knights).
    pub(crate) direction: (isize, isize),
    pub(crate) piece: Piece,
}

/// Result of one ray-casting pass around a king square.
#[derive(Clone, Debug, Default)]
pub(crate) struct CheckState {
    pub(crate) pins: Vec<Pin>,
    pub(crate) checks: Vec<Check>,
}

impl CheckState {
    #[inline]
    pub(crate) fn in_check(&self) -> bool {
        !self.checks.is_empty()
    }

    #[inline]
    pub(crate) fn is_double_check(&self) -> bool {
        self.checks.len() >= 2
    }

    /// Pin axis of the piece on `sq`, if it is pinned
    #[inline]
    pub(crate) fn pin_direction(&self, sq: Square) -> Option<(isize, isize)> {
        self.pins
            .iter()
            .find(|pin| pin.square == sq)
            .map(|pin| pin.direction)
    }
}

impl GameState {
    /// Pins and checks against the side to move's king on its tracked square.
    pub(crate) fn pins_and_checks(&self) -> CheckState {
        let color = self.side_to_move();
        self.pins_and_checks_at(self.king_square(color), color)
    }

    /// Pins and checks against a `color` king standing on `king_sq`.
    ///
    /// `king_sq` need not be where the king actually is. The king itself is
    /// treated as transparent so that a king stepping along a checking ray
    /// is still seen as attacked on its new square.
    pub(crate) fn pins_and_checks_at(&self, king_sq: Square, color: Color) -> CheckState {
        let mut state = CheckState::default();

        for (j, &(dr, dc)) in ALL_DIRECTIONS.iter().enumerate() {
            let orthogonal = j < 4;
            let mut possible_pin: Option<Square> = None;
            let mut sq = king_sq;
            let mut distance = 0;

            while let Some(next) = sq.offset(dr, dc) {
                sq = next;
                distance += 1;
                match self.piece_at(sq) {
                    None => {}
                    Some((c, Piece::King)) if c == color => {}
                    Some((c, _)) if c == color => {
                        if possible_pin.is_some() {
                            break;
                        }
                        possible_pin = Some(sq);
                    }
                    Some((_, piece)) => {
                        let slides = if orthogonal {
                            piece.attacks_straight()
                        } else {
                            piece.attacks_diagonally()
                        };
                        let adjacent = distance == 1
                            && (piece == Piece::King
                                || (piece == Piece::Pawn
                                    && !orthogonal
                                    && dr == color.pawn_direction()));
                        if slides || adjacent {
                            match possible_pin {
                                None => state.checks.push(Check {
                                    square: sq,
                                    direction: (dr, dc),
                                    piece,
                                }),
                                Some(pinned) => state.pins.push(Pin {
                                    square: pinned,
                                    direction: (dr, dc),
                                }),
                            }
                        }
                        break;
                    }
                }
            }
        }

        let enemy = color.opponent();
        for &sq in &KNIGHT_TARGETS[king_sq.as_index()] {
            if self.piece_at(sq) == Some((enemy, Piece::Knight)) {
                state.checks.push(Check {
                    square: sq,
                    direction: (
                        sq.0 as isize - king_sq.0 as isize,
                        sq.1 as isize - king_sq.1 as isize,
                    ),
                    piece: Piece::Knight,
                });
            }
        }

        state
    }

    /// Squares a non-king move may land on to answer `check`: the checker's
    /// square, plus every square between it and the king for a slider.
    pub(crate) fn blocking_squares(&self, king_sq: Square, check: &Check) -> Vec<Square> {
        if check.piece == Piece::Knight {
            return vec![check.square];
        }
        let mut squares = Vec::new();
        let (dr, dc) = check.direction;
        let mut sq = king_sq;
        while let Some(next) = sq.offset(dr, dc) {
            sq = next;
            squares.push(sq);
            if sq == check.square {
                break;
            }
        }
        squares
    }

    /// True if the side to move's king is attacked.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.pins_and_checks().in_check()
    }

    /// True if the opponent of the side to move attacks `sq`.
    ///
    /// The side to move's own king does not block the attack, so the answer
    /// is "would my king be attacked standing there". The state is never
    /// modified.
    #[must_use]
    pub fn square_under_attack(&self, sq: Square) -> bool {
        self.pins_and_checks_at(sq, self.side_to_move()).in_check()
    }
}
