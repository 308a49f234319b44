use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::ORTHOGONALS;
use crate::game_state::chess_types::Piece;
use crate::moves::sliding::trace_rays;

#[inline]
pub fn rook_destinations(piece: &Piece, board: &Board) -> Vec<Coordinate> {
    trace_rays(piece, board, &ORTHOGONALS, false)
}
