//! One cell of the board.

use crate::game_state::chess_types::Piece;

/// A square exclusively owns the piece standing on it.
///
/// `attacked` is a transient cache written by `recompute_attacked`; it is never
/// refreshed automatically when the board changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square {
    pub(crate) piece: Option<Piece>,
    pub(crate) attacked: bool,
}

impl Square {
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Empty, or holding only a pickup marker.
    #[inline]
    pub fn is_passable(&self) -> bool {
        self.piece.as_ref().map_or(true, |p| p.is_pickup())
    }

    #[inline]
    pub fn is_attacked(&self) -> bool {
        self.attacked
    }
}
