use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{CastlingRights, Color, GameState, Move, Piece, Square};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl GameState {
    /// Parse a position from FEN notation.
    ///
    /// Reads placement, side to move, castling and en-passant fields. The
    /// clock fields are accepted and ignored. The result has an empty move
    /// history.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut state = GameState::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        // FEN lists rank 8 first, which is row 0.
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                if piece == Piece::King {
                    kings[color.index()].push(Square(row, col));
                }
                state.set_piece(Square(row, col), color, piece);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        for color in Color::BOTH {
            match kings[color.index()].as_slice() {
                [king] => state.king_squares[color.index()] = *king,
                other => {
                    return Err(FenError::KingCount {
                        color: if color == Color::White { "White" } else { "Black" },
                        found: other.len(),
                    })
                }
            }
        }

        state.white_to_move = match parts[1] {
            "w" => true,
            "b" => false,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => rights.set(Color::White, true),
                'Q' => rights.set(Color::White, false),
                'k' => rights.set(Color::Black, true),
                'q' => rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        let en_passant = if parts[3] == "-" {
            None
        } else {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let sq = Square::from_str(parts[3]).map_err(|_| invalid())?;
            // The target sits behind a pawn of the side that just moved.
            let to_move = state.side_to_move();
            let (target_row, pawn_row) = match to_move {
                Color::White => (2, 3),
                Color::Black => (5, 4),
            };
            let pushed_pawn = Some((to_move.opponent(), Piece::Pawn));
            if sq.0 != target_row
                || !state.is_empty(sq)
                || state.piece_at(Square(pawn_row, sq.1)) != pushed_pawn
            {
                return Err(invalid());
            }
            Some(sq)
        };

        let waiting = state.side_to_move().opponent();
        if state
            .pins_and_checks_at(state.king_square(waiting), waiting)
            .in_check()
        {
            return Err(FenError::OpponentInCheck);
        }

        state.reset_history(rights, en_passant);
        Ok(state)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the position to FEN notation.
    ///
    /// The halfmove clock is always 0; the fullmove number counts the moves
    /// in this state's history.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in &self.squares {
            let mut text = String::new();
            let mut empty = 0;
            for cell in row {
                if let Some((color, piece)) = cell {
                    if empty > 0 {
                        text.push_str(&empty.to_string());
                        empty = 0;
                    }
                    text.push(piece.to_fen_char(*color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = if self.white_to_move { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 {}",
            rows.join("/"),
            active,
            self.castling_rights.to_fen(),
            ep,
            1 + self.move_log.len() / 2
        )
    }

    /// Find the legal move written in chess notation (e.g. `"e2e4"`).
    ///
    /// A trailing `q` is accepted on promotions; every promotion is to a
    /// queen, so it may also be left off.
    ///
    /// # Example
    /// ```
    /// use chess_engine::board::GameState;
    ///
    /// let mut state = GameState::new();
    /// let mv = state.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.chess_notation(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        if !notation.is_ascii() || notation.len() < 4 || notation.len() > 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.chars().count(),
            });
        }

        let from = Square::from_str(&notation[0..2])?;
        let to = Square::from_str(&notation[2..4])?;

        let promotion_suffix = notation.chars().nth(4);
        if let Some(c) = promotion_suffix {
            if c.to_ascii_lowercase() != 'q' {
                return Err(MoveParseError::InvalidPromotion { char: c });
            }
        }

        self.get_valid_moves()
            .into_iter()
            .find(|m| {
                m.from == from
                    && m.to == to
                    && (promotion_suffix.is_none() || m.is_pawn_promotion)
            })
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }

    /// Parse a move and make it in one call.
    ///
    /// # Example
    /// ```
    /// use chess_engine::board::GameState;
    ///
    /// let mut state = GameState::new();
    /// state.make_move_notation("e2e4").unwrap();
    /// state.make_move_notation("e7e5").unwrap();
    /// assert_eq!(state.move_log().len(), 2);
    /// ```
    pub fn make_move_notation(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(notation)?;
        self.make_move(&mv);
        Ok(mv)
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_fen(s)
    }
}
