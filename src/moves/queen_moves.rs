use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::ALL_DIRECTIONS;
use crate::game_state::chess_types::Piece;
use crate::moves::sliding::trace_rays;

/// A powered queen slides through pieces of either color.
#[inline]
pub fn queen_destinations(piece: &Piece, board: &Board) -> Vec<Coordinate> {
    trace_rays(piece, board, &ALL_DIRECTIONS, piece.has_powerup)
}
