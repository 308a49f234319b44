//! Crate root module declarations for the powerup chess rules engine.
//!
//! This file exposes the board model, per-piece move generation, move
//! application with powerup effects, the pickup spawner, the game session
//! wrapper and utility helpers so binaries, tests and outer layers (HTTP
//! handlers, terminal loops, bots) can import stable module paths.

pub mod board_location;
pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod player;
    pub mod square;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_outcome;
}

pub mod powerups {
    pub mod spawner;
}

pub mod session {
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
