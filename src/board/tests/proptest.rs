//! Property-based tests using proptest.

use crate::board::search::{minimax, score_material, SearchConfig};
use crate::board::{Color, GameState, Move, Piece, Square};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `num_moves` random legal moves from the start position.
fn random_game(seed: u64, num_moves: usize) -> GameState {
    let mut state = GameState::new();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..num_moves {
        let moves = state.get_valid_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        state.make_move(mv);
    }
    state
}

fn fen_position_fields(fen: &str) -> Vec<String> {
    fen.split_whitespace().take(4).map(str::to_string).collect()
}

proptest! {
    /// Property: undoing every move restores the starting state exactly
    #[test]
    fn prop_make_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = random_game(seed, num_moves);
        let played = state.move_log().len();

        for _ in 0..played {
            prop_assert!(state.undo_move().is_some());
        }

        prop_assert_eq!(&state, &GameState::new());
        prop_assert_eq!(state.castle_rights_log.len(), 1);
        prop_assert_eq!(state.en_passant_log.len(), 1);
    }

    /// Property: one make/undo pair is an identity on any reachable position
    #[test]
    fn prop_single_make_undo_identity(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut state = random_game(seed, num_moves);
        let before = state.clone();

        for mv in state.get_valid_moves() {
            state.make_move(&mv);
            state.undo_move();
            prop_assert_eq!(&state, &before, "make/undo of {:?} changed the state", mv);
        }
    }

    /// Property: FEN round-trip preserves the position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_game(seed, num_moves);

        let fen = state.to_fen();
        let restored = GameState::from_fen(&fen);

        prop_assert_eq!(state.rows(), restored.rows());
        prop_assert_eq!(state.white_to_move(), restored.white_to_move());
        prop_assert_eq!(state.castling_rights(), restored.castling_rights());
        prop_assert_eq!(state.en_passant_target(), restored.en_passant_target());
        prop_assert_eq!(state.king_square(Color::White), restored.king_square(Color::White));
        prop_assert_eq!(state.king_square(Color::Black), restored.king_square(Color::Black));
        prop_assert_eq!(fen_position_fields(&fen), fen_position_fields(&restored.to_fen()));
    }

    /// Property: legal moves never leave the mover's king attacked
    #[test]
    fn prop_legal_moves_are_legal(seed in seed_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..20 {
            let moves = state.get_valid_moves();
            if moves.is_empty() {
                break;
            }

            let color = state.side_to_move();
            for mv in &moves {
                state.make_move(mv);
                let king = state.king_square(color);
                prop_assert!(
                    !state.pins_and_checks_at(king, color).in_check(),
                    "Legal move left king in check: {:?}", mv
                );
                state.undo_move();
            }

            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(&mv);
        }
    }

    /// Property: tracked king squares always hold that color's king
    #[test]
    fn prop_king_squares_tracked(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let state = random_game(seed, num_moves);

        for color in Color::BOTH {
            let kings: Vec<Square> = (0..64)
                .map(Square::from_index)
                .filter(|&sq| state.piece_at(sq) == Some((color, Piece::King)))
                .collect();
            prop_assert_eq!(kings, vec![state.king_square(color)]);
        }
    }

    /// Property: the terminal flags agree with the move list and check status
    #[test]
    fn prop_terminal_flags_consistent(seed in seed_strategy(), num_moves in 0..60usize) {
        let mut state = random_game(seed, num_moves);
        let moves = state.get_valid_moves();
        let in_check = state.in_check();

        prop_assert!(!(state.checkmate() && state.stalemate()));
        prop_assert_eq!(state.checkmate(), moves.is_empty() && in_check);
        prop_assert_eq!(state.stalemate(), moves.is_empty() && !in_check);
    }

    /// Property: material score is the signed sum of piece values
    #[test]
    fn prop_material_accurate(seed in seed_strategy(), num_moves in 0..40usize) {
        let state = random_game(seed, num_moves);

        let mut expected = 0;
        for sq in 0..64 {
            if let Some((color, piece)) = state.piece_at(Square::from_index(sq)) {
                let value = match piece {
                    Piece::Pawn => 1,
                    Piece::Knight | Piece::Bishop => 3,
                    Piece::Rook => 5,
                    Piece::Queen => 9,
                    Piece::King => 200,
                };
                expected += if color == Color::White { value } else { -value };
            }
        }

        prop_assert_eq!(score_material(&state), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: a shallow search hands the state back unchanged and picks a listed move
    #[test]
    fn prop_minimax_preserves_state(seed in seed_strategy(), num_moves in 0..20usize) {
        let mut state = random_game(seed, num_moves);
        let moves: Vec<Move> = state.get_valid_moves();
        let before = state.clone();

        let result = minimax(&mut state, &moves, &SearchConfig::with_depth(2));

        prop_assert_eq!(&state, &before);
        if let Some(best) = result.best_move {
            prop_assert!(moves.contains(&best));
        }
    }
}
