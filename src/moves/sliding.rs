//! Ray tracing shared by bishops, rooks and queens.

use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;

/// Walks each direction from `piece` until the edge or a blocker.
///
/// Empty squares and pickup markers are destinations and never stop the ray.
/// A same-color piece is never a destination; an opposing piece is. Either
/// kind of piece ends the ray unless `pass_through_pieces` is set.
pub fn trace_rays(
    piece: &Piece,
    board: &Board,
    directions: &[(i8, i8)],
    pass_through_pieces: bool,
) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(14);

    for &(d_rank, d_file) in directions {
        let mut cursor = piece.location.offset(d_rank, d_file);
        while let Some(target) = cursor {
            match board.piece_at(target) {
                None => out.push(target),
                Some(other) if other.is_pickup() => out.push(target),
                Some(other) if other.color == piece.color => {
                    if !pass_through_pieces {
                        break;
                    }
                }
                Some(_) => {
                    out.push(target);
                    if !pass_through_pieces {
                        break;
                    }
                }
            }
            cursor = target.offset(d_rank, d_file);
        }
    }

    out
}
