//! Seeded random playout runner.
//!
//! Plays uniformly random moves for both sides through `GameSession` and
//! prints each move with its outcome message, then the final board.
//!
//! Usage:
//! `cargo run --release --bin random_playout -- --seed 7 --max-plies 200`

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use powerup_chess::chess_errors::ChessErrors;
use powerup_chess::powerups::spawner::PowerupConfig;
use powerup_chess::session::game_session::GameSession;
use powerup_chess::utils::algebraic::coordinate_to_algebraic;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> Result<(), ChessErrors> {
    let seed = parse_arg_u64("--seed", 1);
    let max_plies = parse_arg_u64("--max-plies", 200).max(1);

    let mut session = GameSession::with_seed(seed, PowerupConfig::default());
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));

    println!("seed {seed}, up to {max_plies} plies\n");
    println!("{}\n", session.board());

    let mut plies = 0u64;
    while plies < max_plies && !session.is_game_over() {
        let moves = session.legal_moves();
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            println!("{} has no moves", session.side_to_move().name());
            break;
        };

        let mover = session.side_to_move();
        let report = session.make_move(from, to)?;
        plies += 1;
        println!(
            "{plies:>4}. {:<5} {}-{}  {}",
            mover.name(),
            coordinate_to_algebraic(from),
            coordinate_to_algebraic(to),
            report.message
        );
    }

    println!("\n{}\n", session.board());
    match session.winner() {
        Some(winner) => println!("{} won after {plies} plies", winner.name()),
        None => println!("no result after {plies} plies"),
    }
    Ok(())
}
