//! Canonical rule constants.
//!
//! Starting layout, king lives and the offset tables shared by move
//! generation and move execution.

use crate::game_state::chess_types::PieceClass;

/// Lives every king starts with.
pub const STARTING_LIVES: u8 = 3;

/// Back-rank layout from file a to file h.
pub const BACK_RANK: [PieceClass; 8] = [
    PieceClass::Rook,
    PieceClass::Knight,
    PieceClass::Bishop,
    PieceClass::Queen,
    PieceClass::King,
    PieceClass::Bishop,
    PieceClass::Knight,
    PieceClass::Rook,
];

pub const WHITE_BACK_RANK: u8 = 7;
pub const WHITE_PAWN_RANK: u8 = 6;
pub const BLACK_PAWN_RANK: u8 = 1;
pub const BLACK_BACK_RANK: u8 = 0;

/// (d_rank, d_file) of the eight L-shaped knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
];

/// Extra orthogonal steps a powered knight may take.
pub const KNIGHT_POWERUP_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 2),
    (2, 0),
    (-2, 0),
    (0, -2),
];

pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, 1), (1, -1)];

pub const ORTHOGONALS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];
