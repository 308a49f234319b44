//! Pawn movement. Pawns never promote by reaching the last rank; promotion
//! only happens when a pawn collects a powerup.

use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};

/// Rank step of a forward pawn move for `color`.
#[inline]
pub const fn forward_step(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
        Color::Pickup => 0,
    }
}

pub fn pawn_destinations(piece: &Piece, board: &Board) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(4);
    let step = forward_step(piece.color);
    if step == 0 {
        return out;
    }
    let has_moved = matches!(piece.kind, PieceKind::Pawn { has_moved: true });

    if let Some(one) = piece.location.offset(step, 0) {
        if board.square(one).is_passable() {
            out.push(one);
            if !has_moved {
                if let Some(two) = one.offset(step, 0) {
                    if board.square(two).is_passable() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_file in [1, -1] {
        if let Some(target) = piece.location.offset(step, d_file) {
            if board
                .piece_at(target)
                .is_some_and(|other| other.is_opponent_of(piece.color))
            {
                out.push(target);
            }
        }
    }

    out
}
