use super::{CastlingRights, Color, Move, Piece, Square};

/// Back rank layout shared by both colors, a-file first.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The complete, mutable state of one game.
///
/// `GameState` owns the position and every piece of derived bookkeeping
/// (king squares, castling rights, en-passant target) together with the
/// history stacks needed to undo moves exactly. Generation and search both
/// mutate it in place through [`GameState::make_move`] and
/// [`GameState::undo_move`].
///
/// `checkmate` and `stalemate` describe the position most recently queried
/// with [`GameState::get_valid_moves`]; undoing a move always clears them.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) white_to_move: bool,
    pub(crate) move_log: Vec<Move>,
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    /// One snapshot per position reached; the last entry mirrors `castling_rights`.
    pub(crate) castle_rights_log: Vec<CastlingRights>,
    pub(crate) en_passant_target: Option<Square>,
    /// One entry per position reached; the last entry mirrors `en_passant_target`.
    pub(crate) en_passant_log: Vec<Option<Square>>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Standard starting position, White to move, all castling rights.
    pub fn new() -> Self {
        let mut state = GameState::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            state.set_piece(Square(0, col), Color::Black, *piece);
            state.set_piece(Square(1, col), Color::Black, Piece::Pawn);
            state.set_piece(Square(6, col), Color::White, Piece::Pawn);
            state.set_piece(Square(7, col), Color::White, *piece);
        }
        state.king_squares = [Square(7, 4), Square(0, 4)];
        state.reset_history(CastlingRights::all(), None);
        state
    }

    /// Board with no pieces; callers place pieces and kings before use.
    pub(crate) fn empty() -> Self {
        GameState {
            squares: [[None; 8]; 8],
            white_to_move: true,
            move_log: Vec::new(),
            king_squares: [Square(7, 4), Square(0, 4)],
            castling_rights: CastlingRights::none(),
            castle_rights_log: vec![CastlingRights::none()],
            en_passant_target: None,
            en_passant_log: vec![None],
            checkmate: false,
            stalemate: false,
        }
    }

    /// Seed the history stacks so the current rights and en-passant target
    /// become the bottom snapshot.
    pub(crate) fn reset_history(
        &mut self,
        rights: CastlingRights,
        en_passant_target: Option<Square>,
    ) {
        self.move_log.clear();
        self.castling_rights = rights;
        self.castle_rights_log = vec![rights];
        self.en_passant_target = en_passant_target;
        self.en_passant_log = vec![en_passant_target];
        self.checkmate = false;
        self.stalemate = false;
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    /// Piece standing on `sq`, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Tracked square of `color`'s king
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Square a pawn may capture onto en passant this ply
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Moves made so far, oldest first
    #[must_use]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    /// Most recent move, if any
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// True if the last `get_valid_moves` call found the side to move mated
    #[must_use]
    pub fn checkmate(&self) -> bool {
        self.checkmate
    }

    /// True if the last `get_valid_moves` call found no moves and no check
    #[must_use]
    pub fn stalemate(&self) -> bool {
        self.stalemate
    }

    /// Rows of the board, row 0 (rank 8) first.
    #[must_use]
    pub fn rows(&self) -> &[[Option<(Color, Piece)>; 8]; 8] {
        &self.squares
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// Equality covers everything that defines the position and its undo
/// history; the terminal flags are query results and are ignored.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.squares == other.squares
            && self.white_to_move == other.white_to_move
            && self.move_log == other.move_log
            && self.king_squares == other.king_squares
            && self.castling_rights == other.castling_rights
            && self.castle_rights_log == other.castle_rights_log
            && self.en_passant_target == other.en_passant_target
            && self.en_passant_log == other.en_passant_log
    }
}

impl Eq for GameState {}
