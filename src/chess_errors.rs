//! Errors used throughout the powerup chess engine.
//!
//! This module defines the canonical error type returned by board setup,
//! selection, move execution and the coordinate helpers. `ChessErrors` is the
//! single error type across the crate to simplify propagation and matching.
//!
//! Usage guidelines:
//! - Coordinate variants (`InvalidCoordinate`, `InvalidAlgebraicString`,
//!   `InvalidAlgebraicChar`) are rejected before any board state is touched and
//!   are suitable for presenting to end users.
//! - Illegal-move variants (`IllegalDestination`, `EmptySourceSquare`,
//!   `NotYourPiece`, `ImmovablePiece`, `GameAlreadyOver`) are domain-level
//!   rejections; the board is left exactly as it was.
//! - Invariant variants (`SquareOccupied`, `NoSelection`) indicate a caller
//!   broke the engine's contract. They are fatal to the call, not the session.

use thiserror::Error;

use crate::board_location::Coordinate;
use crate::game_state::chess_types::Color;

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Rank or file outside `0..=7`.
    ///
    /// Payload: the offending (rank, file) pair.
    #[error("invalid coordinate: rank {rank}, file {file}")]
    InvalidCoordinate { rank: u8, file: u8 },

    /// An algebraic square string (for example "e2") could not be parsed.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// A single character of an algebraic square was out of range.
    #[error("invalid algebraic character: {0}")]
    InvalidAlgebraicChar(char),

    /// The destination is not among the selected piece's legal destinations.
    #[error("illegal move from {from} to {to}")]
    IllegalDestination { from: Coordinate, to: Coordinate },

    /// Tried to select or move from an empty square.
    #[error("no piece at {0}")]
    EmptySourceSquare(Coordinate),

    /// Tried to select or move a piece owned by the side not to move.
    ///
    /// Payload: the square and the color whose turn it actually is.
    #[error("piece at {0} does not belong to {1:?}, the side to move")]
    NotYourPiece(Coordinate, Color),

    /// Pickup markers never move under their own agency.
    #[error("piece at {0} cannot be moved")]
    ImmovablePiece(Coordinate),

    /// A move was submitted after the session ended.
    #[error("game is already over")]
    GameAlreadyOver,

    /// Attempted to place a piece on a square that already holds one.
    #[error("square {0} already has a piece")]
    SquareOccupied(Coordinate),

    /// `execute_move` was called without a prior selection.
    #[error("no square is selected")]
    NoSelection,
}
