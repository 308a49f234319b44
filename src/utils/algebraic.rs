//! Conversions between board coordinates and algebraic squares (e.g. `e2`).
//!
//! Row 0 of the board is rank 8, so "e2" is rank 6, file 4.

use crate::board_location::Coordinate;
use crate::chess_errors::ChessErrors;

/// Convert an algebraic square (for example: "e4") to a coordinate.
pub fn algebraic_to_coordinate(square: &str) -> Result<Coordinate, ChessErrors> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank as char));
    }

    Coordinate::new(b'8' - rank, file - b'a')
}

/// Convert a coordinate to an algebraic square (for example: "e4").
pub fn coordinate_to_algebraic(at: Coordinate) -> String {
    let file_char = char::from(b'a' + at.file());
    let rank_char = char::from(b'8' - at.rank());
    format!("{file_char}{rank_char}")
}
