use std::env;
use std::process::ExitCode;

use chess_engine::board::GameState;

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut state = GameState::new();
    for mv in args.iter().skip(1) {
        if let Err(err) = state.make_move_notation(mv) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    let legal_moves = state.get_valid_moves();
    println!(
        "side_to_move: {}",
        if state.white_to_move() { "white" } else { "black" }
    );
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", state.checkmate());
    println!("stalemate: {}", state.stalemate());
    for mv in &legal_moves {
        println!("{}", mv.chess_notation());
    }
    ExitCode::SUCCESS
}
