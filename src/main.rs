use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_engine::board::search::{
    find_best_move_greedy_with, find_random_move_with, minimax, DEFAULT_DEPTH,
};
use chess_engine::board::{GameState, Move, SearchConfig};

/// Move picker driving one side of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Player {
    /// Fixed-depth minimax, random fallback when it finds nothing
    Minimax,
    /// Two-ply greedy evaluator
    Greedy,
    /// Uniformly random legal moves
    Random,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Let two automated players play a game of chess", long_about = None)]
struct Args {
    /// Player for White
    #[arg(long, value_enum, default_value_t = Player::Minimax)]
    white: Player,

    /// Player for Black
    #[arg(long, value_enum, default_value_t = Player::Random)]
    black: Player,

    /// Minimax depth in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Stop after this many plies if the game has not ended
    #[arg(long, default_value_t = 200)]
    max_plies: usize,

    /// Seed for the random and greedy players
    #[arg(long)]
    seed: Option<u64>,

    /// Starting FEN position
    #[arg(long)]
    fen: Option<String>,

    /// Print the board after every move
    #[arg(long)]
    verbose: bool,
}

fn pick_move(
    player: Player,
    state: &mut GameState,
    moves: &[Move],
    config: &SearchConfig,
    rng: &mut StdRng,
) -> Option<Move> {
    match player {
        Player::Minimax => {
            let result = minimax(state, moves, config);
            log::info!(
                "minimax score {} after {} nodes",
                result.score,
                result.nodes
            );
            result
                .best_move
                .or_else(|| find_random_move_with(moves, rng))
        }
        Player::Greedy => find_best_move_greedy_with(state, moves, rng)
            .or_else(|| find_random_move_with(moves, rng)),
        Player::Random => find_random_move_with(moves, rng),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut state = match args.fen.as_deref() {
        Some(fen) => match GameState::try_from_fen(fen) {
            Ok(state) => state,
            Err(err) => {
                eprintln!("invalid FEN: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => GameState::new(),
    };
    let config = SearchConfig::with_depth(args.depth);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("{state}\n");

    let mut plies = 0;
    loop {
        let moves = state.get_valid_moves();
        if state.checkmate() {
            println!("Checkmate, {} wins", state.side_to_move().opponent());
            break;
        }
        if state.stalemate() {
            println!("Stalemate");
            break;
        }
        if plies >= args.max_plies {
            println!("Stopped after {plies} plies");
            break;
        }

        let side = state.side_to_move();
        let player = if state.white_to_move() {
            args.white
        } else {
            args.black
        };
        let Some(mv) = pick_move(player, &mut state, &moves, &config, &mut rng) else {
            break;
        };

        log::debug!("{side} ({player:?}) plays {mv}");
        state.make_move(&mv);
        plies += 1;

        println!("{:>3}. {} {}", (plies + 1) / 2, side, mv.chess_notation());
        if args.verbose {
            println!("{state}\n");
        }
    }

    println!("\n{state}");
    println!("{}", state.to_fen());
    ExitCode::SUCCESS
}
