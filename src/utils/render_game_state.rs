//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and the playout
//! binary. Row 0 is printed first and labelled rank 8. Pieces holding a
//! powerup are followed by `*`; pickup markers show as `✦`.

use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceClass};

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    let squares: Vec<Coordinate> = Coordinate::all().collect();
    for row in squares.chunks(8) {
        let rank = row.first().map_or(0, |c| c.rank());
        out.push(char::from(b'8' - rank));
        out.push(' ');

        for &at in row {
            out.push(' ');
            match board.piece_at(at) {
                Some(piece) => {
                    out.push(piece_to_unicode(piece));
                    out.push(if piece.has_powerup && !piece.is_pickup() { '*' } else { ' ' });
                }
                None => out.push_str("· "),
            }
        }

        out.push(' ');
        out.push(char::from(b'8' - rank));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.color, piece.class()) {
        (_, PieceClass::Powerup) | (Color::Pickup, _) => '✦',
        (Color::White, PieceClass::Pawn) => '♙',
        (Color::White, PieceClass::Knight) => '♘',
        (Color::White, PieceClass::Bishop) => '♗',
        (Color::White, PieceClass::Rook) => '♖',
        (Color::White, PieceClass::Queen) => '♕',
        (Color::White, PieceClass::King) => '♔',
        (Color::Black, PieceClass::Pawn) => '♟',
        (Color::Black, PieceClass::Knight) => '♞',
        (Color::Black, PieceClass::Bishop) => '♝',
        (Color::Black, PieceClass::Rook) => '♜',
        (Color::Black, PieceClass::Queen) => '♛',
        (Color::Black, PieceClass::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board_location::Coordinate;
    use crate::game_state::board::Board;
    use crate::powerups::spawner::PowerupConfig;

    #[test]
    fn start_position_rows() {
        let mut board = Board::with_seed(0, PowerupConfig::disabled());
        board.place_pickup(Coordinate::new(4, 4).expect("valid square")).expect("empty square");
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜  8");
        assert_eq!(lines[5], "4  ·  ·  ·  ·  ✦  ·  ·  ·  4");
        assert_eq!(lines[8], "1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖  1");
    }
}
