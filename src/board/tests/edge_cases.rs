//! Edge case tests for special chess positions and moves.

use super::{find_move, sq};
use crate::board::{Color, GameState, Move, Piece, Square};

fn notations(moves: &[Move]) -> Vec<String> {
    moves.iter().map(Move::chess_notation).collect()
}

#[test]
fn test_start_position_move_order() {
    let mut state = GameState::new();
    let moves = state.get_valid_moves();
    assert_eq!(moves.len(), 20);

    let names = notations(&moves);
    assert_eq!(&names[..4], ["a2a3", "a2a4", "b2b3", "b2b4"]);
    assert_eq!(&names[16..], ["b1a3", "b1c3", "g1f3", "g1h3"]);
    assert!(!state.checkmate());
    assert!(!state.stalemate());
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut state = GameState::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        state.make_move_notation(mv).unwrap();
    }
    assert!(state.in_check());
    assert!(state.get_valid_moves().is_empty());
    assert!(state.checkmate());
    assert!(!state.stalemate());
}

#[test]
fn test_stalemate_position() {
    let mut state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(!state.in_check());
    assert!(state.get_valid_moves().is_empty());
    assert!(state.stalemate());
    assert!(!state.checkmate());
}

#[test]
fn test_flags_clear_when_moves_exist() {
    let mut state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    state.get_valid_moves();
    assert!(state.stalemate());

    assert!(state.make_move_notation("h8h7").is_err());

    let mut state = GameState::from_fen("7k/8/8/8/8/8/8/3QK3 b - - 0 1");
    assert!(!state.get_valid_moves().is_empty());
    assert!(!state.stalemate());
    assert!(!state.checkmate());
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut state =
        GameState::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1");
    let moves = state.get_valid_moves();
    let ep = moves
        .iter()
        .find(|m| m.is_en_passant)
        .copied()
        .expect("en passant should be available");
    assert_eq!(ep.chess_notation(), "e5d6");

    state.make_move(&ep);
    assert!(state.is_empty(sq("d5")), "captured pawn should be removed");
    assert!(state.is_empty(sq("e5")));
    assert_eq!(state.piece_at(sq("d6")), Some((Color::White, Piece::Pawn)));

    state.undo_move();
    assert_eq!(state.piece_at(sq("d5")), Some((Color::Black, Piece::Pawn)));
    assert_eq!(state.piece_at(sq("e5")), Some((Color::White, Piece::Pawn)));
    assert!(state.is_empty(sq("d6")));
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut state = GameState::new();
    for mv in ["e2e4", "a7a6", "e4e5", "d7d5", "h2h3", "h7h6"] {
        state.make_move_notation(mv).unwrap();
    }
    assert!(state.get_valid_moves().iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_en_passant_exposing_king_on_rank_is_illegal() {
    let mut state = GameState::from_fen("8/8/8/KPp4r/8/8/8/7k w - c6 0 1");
    let moves = state.get_valid_moves();
    assert!(moves.iter().all(|m| !m.is_en_passant));
    assert!(moves.iter().any(|m| m.chess_notation() == "b5b6"));
}

#[test]
fn test_en_passant_may_capture_checking_pawn() {
    let mut state = GameState::from_fen("8/8/8/2k5/3Pp3/8/8/4K3 b - d3 0 1");
    assert!(state.in_check());
    let mv = find_move(&mut state, "e4", "d3");
    assert!(mv.is_en_passant);

    state.make_move(&mv);
    assert!(state.is_empty(sq("d4")));
}

#[test]
fn test_pinned_rook_moves_along_pin_only() {
    let mut state = GameState::from_fen("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1");
    let moves = state.get_valid_moves();
    let rook_moves: Vec<_> = moves.iter().filter(|m| m.piece() == Piece::Rook).collect();
    assert_eq!(rook_moves.len(), 5);
    assert!(rook_moves.iter().all(|m| m.to.col() == 4));
    assert_eq!(moves.len(), 9);
}

#[test]
fn test_pinned_knight_cannot_move() {
    let mut state = GameState::from_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
    let moves = state.get_valid_moves();
    assert!(moves.iter().all(|m| m.piece() == Piece::King));
    assert_eq!(moves.len(), 4);
}

#[test]
fn test_double_check_allows_only_king_moves() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/5n2/R7/r3K3 w - - 0 1");
    let moves = state.get_valid_moves();
    assert!(moves.iter().all(|m| m.piece() == Piece::King));
    let mut names = notations(&moves);
    names.sort();
    assert_eq!(names, ["e1e2", "e1f2"]);
}

#[test]
fn test_single_check_block_or_king_move() {
    let mut state = GameState::from_fen("4k3/4r3/8/8/8/8/3B4/4K3 w - - 0 1");
    let mut names = notations(&state.get_valid_moves());
    names.sort();
    assert_eq!(names, ["d2e3", "e1d1", "e1f1", "e1f2"]);
}

#[test]
fn test_king_cannot_retreat_along_checking_ray() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
    let mut names = notations(&state.get_valid_moves());
    names.sort();
    assert_eq!(names, ["e1d2", "e1e2", "e1f2"]);
}

#[test]
fn test_kings_keep_their_distance() {
    let mut state = GameState::from_fen("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
    let moves = state.get_valid_moves();
    assert_eq!(moves.len(), 5);
    assert!(moves.iter().all(|m| m.to.row() >= 5));
}

#[test]
fn test_castling_through_attacked_square_is_illegal() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/2b5/8/8/R3K2R w KQkq - 0 1");
    let castles: Vec<_> = state
        .get_valid_moves()
        .into_iter()
        .filter(|m| m.is_castle)
        .collect();
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].chess_notation(), "e1c1");
}

#[test]
fn test_queenside_castle_ignores_attack_on_b_file() {
    let mut state = GameState::from_fen("1r2k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1");
    let mv = find_move(&mut state, "e1", "c1");
    assert!(mv.is_castle);
    assert!(!mv.is_castle_kingside());
}

#[test]
fn test_no_castling_out_of_check() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1");
    assert!(state.in_check());
    assert!(state.get_valid_moves().iter().all(|m| !m.is_castle));
}

#[test]
fn test_castling_needs_rook_on_corner() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w KQ - 0 1");
    assert!(state.get_valid_moves().iter().all(|m| !m.is_castle));
}

#[test]
fn test_castles_listed_after_other_moves() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let moves = state.get_valid_moves();
    let first_castle = moves.iter().position(|m| m.is_castle).unwrap();
    assert!(moves[first_castle..].iter().all(|m| m.is_castle));
    assert_eq!(moves.len(), 26);
}

#[test]
fn test_square_under_attack_does_not_mutate() {
    let state = GameState::new();
    let before = state.clone();
    assert!(state.square_under_attack(sq("f6")));
    assert!(state.square_under_attack(sq("d6")));
    assert!(!state.square_under_attack(sq("e4")));
    assert!(!state.square_under_attack(sq("f3")));
    assert_eq!(state, before);
}

#[test]
fn test_promotion_flag_on_last_rank() {
    let mut state = GameState::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");
    let promotions: Vec<_> = state
        .get_valid_moves()
        .into_iter()
        .filter(|m| m.is_pawn_promotion)
        .collect();
    assert_eq!(promotions.len(), 1);
    assert_eq!(promotions[0].to, Square(0, 0));
}

#[test]
fn test_move_new_reads_board() {
    let state = GameState::new();
    let mv = Move::new(sq("e2"), sq("e4"), &state).unwrap();
    assert_eq!(mv.piece_moved, (Color::White, Piece::Pawn));
    assert_eq!(mv.piece_captured, None);
    assert!(!mv.is_pawn_promotion);
    assert!(Move::new(sq("e4"), sq("e5"), &state).is_none());
}
