//! Piece, color and per-kind state types shared by the board and move generation.
//!
//! Pieces are a closed sum type: everything kind-specific (pawn/king move
//! bookkeeping, king lives and check flags) lives inside `PieceKind`, so every
//! rule dispatch is an exhaustive `match`.
use crate::board_location::Coordinate;
use crate::game_state::chess_rules::STARTING_LIVES;

/// Owner of a piece. `Pickup` is the neutral marker used only by powerup tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
    Pickup,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Pickup => Color::Pickup,
        }
    }

    /// 1 for white, 2 for black; the pickup marker has no turn.
    #[inline]
    pub const fn player_number(self) -> Option<u8> {
        match self {
            Color::White => Some(1),
            Color::Black => Some(2),
            Color::Pickup => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Pickup => "pickup",
        }
    }
}

/// Piece class without any attached state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceClass {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Powerup,
}

impl PieceClass {
    pub const fn name(self) -> &'static str {
        match self {
            PieceClass::Pawn => "pawn",
            PieceClass::Knight => "knight",
            PieceClass::Bishop => "bishop",
            PieceClass::Rook => "rook",
            PieceClass::Queen => "queen",
            PieceClass::King => "king",
            PieceClass::Powerup => "powerup",
        }
    }
}

/// King bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KingState {
    pub has_moved: bool,
    pub lives_remaining: u8,
    pub in_check: bool,
    pub in_checkmate: bool,
}

impl Default for KingState {
    fn default() -> Self {
        Self {
            has_moved: false,
            lives_remaining: STARTING_LIVES,
            in_check: false,
            in_checkmate: false,
        }
    }
}

/// Piece kind together with the state only that kind carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn { has_moved: bool },
    Knight,
    Bishop,
    Rook,
    Queen,
    King(KingState),
    Powerup,
}

impl PieceKind {
    pub fn fresh(class: PieceClass) -> Self {
        match class {
            PieceClass::Pawn => PieceKind::Pawn { has_moved: false },
            PieceClass::Knight => PieceKind::Knight,
            PieceClass::Bishop => PieceKind::Bishop,
            PieceClass::Rook => PieceKind::Rook,
            PieceClass::Queen => PieceKind::Queen,
            PieceClass::King => PieceKind::King(KingState::default()),
            PieceClass::Powerup => PieceKind::Powerup,
        }
    }

    pub const fn class(&self) -> PieceClass {
        match self {
            PieceKind::Pawn { .. } => PieceClass::Pawn,
            PieceKind::Knight => PieceClass::Knight,
            PieceKind::Bishop => PieceClass::Bishop,
            PieceKind::Rook => PieceClass::Rook,
            PieceKind::Queen => PieceClass::Queen,
            PieceKind::King(_) => PieceClass::King,
            PieceKind::Powerup => PieceClass::Powerup,
        }
    }
}

/// A piece on the board. Its `location` always matches the square holding it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub location: Coordinate,
    pub has_powerup: bool,
}

impl Piece {
    /// A fresh piece of the given class. Powerup tokens are always neutral and powered.
    pub fn new(class: PieceClass, color: Color, location: Coordinate) -> Self {
        if class == PieceClass::Powerup {
            return Self::pickup(location);
        }
        Self {
            kind: PieceKind::fresh(class),
            color,
            location,
            has_powerup: false,
        }
    }

    pub fn pickup(location: Coordinate) -> Self {
        Self {
            kind: PieceKind::Powerup,
            color: Color::Pickup,
            location,
            has_powerup: true,
        }
    }

    #[inline]
    pub const fn class(&self) -> PieceClass {
        self.kind.class()
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King(_))
    }

    #[inline]
    pub fn is_pickup(&self) -> bool {
        matches!(self.kind, PieceKind::Powerup)
    }

    /// True for white/black pieces of the other side; pickup markers are never opponents.
    #[inline]
    pub fn is_opponent_of(&self, color: Color) -> bool {
        !self.is_pickup() && self.color != color
    }

    pub fn king_state(&self) -> Option<&KingState> {
        match &self.kind {
            PieceKind::King(state) => Some(state),
            _ => None,
        }
    }

    pub fn king_state_mut(&mut self) -> Option<&mut KingState> {
        match &mut self.kind {
            PieceKind::King(state) => Some(state),
            _ => None,
        }
    }

    pub fn lives_remaining(&self) -> Option<u8> {
        self.king_state().map(|k| k.lives_remaining)
    }

    /// `None` for kinds that do not track movement.
    pub fn has_moved(&self) -> Option<bool> {
        match self.kind {
            PieceKind::Pawn { has_moved } => Some(has_moved),
            PieceKind::King(state) => Some(state.has_moved),
            _ => None,
        }
    }

    pub fn mark_moved(&mut self) {
        match &mut self.kind {
            PieceKind::Pawn { has_moved } => *has_moved = true,
            PieceKind::King(state) => state.has_moved = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(rank: u8, file: u8) -> Coordinate {
        Coordinate::new(rank, file).expect("test coordinate should be valid")
    }

    #[test]
    fn pickup_is_neutral_and_powered() {
        let token = Piece::new(PieceClass::Powerup, Color::White, at(4, 4));
        assert_eq!(token.color, Color::Pickup);
        assert!(token.has_powerup);
        assert!(!token.is_opponent_of(Color::White));
        assert!(!token.is_opponent_of(Color::Black));
    }

    #[test]
    fn kings_start_with_three_lives() {
        let king = Piece::new(PieceClass::King, Color::Black, at(0, 4));
        assert_eq!(king.lives_remaining(), Some(3));
        assert_eq!(king.has_moved(), Some(false));
        assert_eq!(Piece::new(PieceClass::Rook, Color::Black, at(0, 0)).has_moved(), None);
    }

    #[test]
    fn mark_moved_only_touches_pawns_and_kings() {
        let mut pawn = Piece::new(PieceClass::Pawn, Color::White, at(6, 0));
        pawn.mark_moved();
        assert_eq!(pawn.has_moved(), Some(true));

        let mut queen = Piece::new(PieceClass::Queen, Color::White, at(7, 3));
        let before = queen;
        queen.mark_moved();
        assert_eq!(queen, before);
    }
}
