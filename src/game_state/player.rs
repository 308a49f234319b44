use crate::game_state::chess_types::Color;

/// A seat at the board. Pieces are found on the board, not tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub color: Color,
    pub turn: bool,
}

impl Player {
    pub const fn new(color: Color) -> Self {
        Self { color, turn: false }
    }
}
