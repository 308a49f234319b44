use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{KNIGHT_OFFSETS, KNIGHT_POWERUP_OFFSETS};
use crate::game_state::chess_types::Piece;

pub fn knight_destinations(piece: &Piece, board: &Board) -> Vec<Coordinate> {
    let extra: &[(i8, i8)] = if piece.has_powerup {
        &KNIGHT_POWERUP_OFFSETS
    } else {
        &[]
    };

    KNIGHT_OFFSETS
        .iter()
        .chain(extra)
        .filter_map(|&(d_rank, d_file)| piece.location.offset(d_rank, d_file))
        .filter(|&target| {
            board
                .piece_at(target)
                .map_or(true, |other| other.color != piece.color)
        })
        .collect()
}

/// Whether a relocation by (d_rank, d_file) was an ordinary L-jump.
#[inline]
pub fn is_standard_jump(d_rank: i8, d_file: i8) -> bool {
    KNIGHT_OFFSETS.contains(&(d_rank, d_file))
}
