//! Description of what a single executed move did to the board.

use crate::board_location::Coordinate;
use crate::game_state::chess_types::{Color, Piece, PieceClass};

/// A king losing a life, and how many it has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingHit {
    pub color: Color,
    pub location: Coordinate,
    pub lives_remaining: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub mover: PieceClass,
    pub color: Color,
    pub from: Coordinate,
    pub to: Coordinate,
    /// False when the mover stayed put (conversion, or a king that survived a hit).
    pub relocated: bool,
    /// A real piece removed by landing on it. Pickup markers are not captures.
    pub captured: Option<Piece>,
    pub powerup_collected: bool,
    /// Class of an opposing piece recolored by a powered bishop.
    pub converted: Option<PieceClass>,
    pub promoted_to: Option<PieceClass>,
    pub king_hits: Vec<KingHit>,
    pub destroyed_king: Option<Color>,
    /// Pieces removed by a powered rook's blast.
    pub blasted: Vec<Piece>,
    pub spawned_pickup: Option<Coordinate>,
}

impl MoveOutcome {
    pub fn new(mover: &Piece, to: Coordinate) -> Self {
        Self {
            mover: mover.class(),
            color: mover.color,
            from: mover.location,
            to,
            relocated: false,
            captured: None,
            powerup_collected: false,
            converted: None,
            promoted_to: None,
            king_hits: Vec::new(),
            destroyed_king: None,
            blasted: Vec::new(),
            spawned_pickup: None,
        }
    }
}
