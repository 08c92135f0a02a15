use serde::Deserialize;

use chess_engine::board::GameState;

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Position>,
}

#[derive(Deserialize)]
struct Position {
    name: String,
    fen: String,
    legal_moves: usize,
    in_check: bool,
    checkmate: bool,
    stalemate: bool,
    #[serde(default)]
    perft: Vec<u64>,
    #[serde(default)]
    must_include: Vec<String>,
}

fn load() -> PositionSet {
    let data = include_str!("data/positions.json");
    serde_json::from_str(data).expect("invalid positions.json")
}

#[test]
fn position_suite_status() {
    for position in load().positions {
        let mut state = GameState::from_fen(&position.fen);
        let moves = state.get_valid_moves();

        assert_eq!(moves.len(), position.legal_moves, "legal moves for {}", position.name);
        assert_eq!(state.in_check(), position.in_check, "check for {}", position.name);
        assert_eq!(state.checkmate(), position.checkmate, "checkmate for {}", position.name);
        assert_eq!(state.stalemate(), position.stalemate, "stalemate for {}", position.name);

        let notations: Vec<String> = moves.iter().map(|m| m.chess_notation()).collect();
        for expected in &position.must_include {
            assert!(
                notations.contains(expected),
                "{} should allow {expected}, got {notations:?}",
                position.name
            );
        }
    }
}

#[test]
fn position_suite_perft() {
    for position in load().positions {
        let mut state = GameState::from_fen(&position.fen);
        for (depth, &expected) in position.perft.iter().enumerate() {
            assert_eq!(
                state.perft(depth + 1),
                expected,
                "perft({}) for {}",
                depth + 1,
                position.name
            );
        }
    }
}

#[test]
fn fen_round_trip_for_suite() {
    for position in load().positions {
        let state = GameState::from_fen(&position.fen);
        let again = GameState::from_fen(&state.to_fen());
        assert_eq!(state, again, "round trip for {}", position.name);
    }
}
