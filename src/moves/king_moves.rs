//! King movement and check detection.
//!
//! King safety reads the per-square `attacked` cache. The cache only restricts
//! a king when it was computed for that king's own color; a king on the
//! attacking side (for example while its side's attacks are being collected)
//! sees every adjacent empty square.

use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::ALL_DIRECTIONS;
use crate::game_state::chess_types::Piece;

/// Check state derived for one king.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KingStatus {
    pub in_check: bool,
    pub in_checkmate: bool,
}

#[inline]
fn safety_applies(piece: &Piece, board: &Board) -> bool {
    board.attacked_for() == Some(piece.color)
}

/// Adjacent squares that are empty and unattacked, or hold anything not ours.
/// Captures ignore the attacked flag.
pub fn king_destinations(piece: &Piece, board: &Board) -> Vec<Coordinate> {
    let guarded = safety_applies(piece, board);

    ALL_DIRECTIONS
        .iter()
        .filter_map(|&(d_rank, d_file)| piece.location.offset(d_rank, d_file))
        .filter(|&target| match board.piece_at(target) {
            Some(other) => other.color != piece.color,
            None => !(guarded && board.is_attacked(target)),
        })
        .collect()
}

/// In check when the king's own square is attacked; checkmate when it is in
/// check with no destinations. No move and no check is not a terminal state.
pub fn king_status(piece: &Piece, board: &Board, destinations: &[Coordinate]) -> KingStatus {
    let in_check = safety_applies(piece, board) && board.is_attacked(piece.location);
    KingStatus {
        in_check,
        in_checkmate: in_check && destinations.is_empty(),
    }
}
