//! Legal destination queries and selection caching.
//!
//! `piece_destinations` is the pure per-piece rule dispatch. The board-level
//! helpers wrap it with square validation, king status bookkeeping and the
//! selection cache that `execute_move` checks against.
//!
//! Kings read the `attacked` cache, so run `recompute_attacked` for the
//! king's color before asking for king moves or check status.

use log::trace;

use crate::board_location::Coordinate;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::move_generation::legal_move_checks::recompute_attacked;
use crate::moves::bishop_moves::bishop_destinations;
use crate::moves::king_moves::{king_destinations, king_status};
use crate::moves::knight_moves::knight_destinations;
use crate::moves::pawn_moves::pawn_destinations;
use crate::moves::queen_moves::queen_destinations;
use crate::moves::rook_moves::rook_destinations;

/// Destinations of `piece` on the current board. Reads, never writes.
pub fn piece_destinations(piece: &Piece, board: &Board) -> Vec<Coordinate> {
    match piece.kind {
        PieceKind::Pawn { .. } => pawn_destinations(piece, board),
        PieceKind::Knight => knight_destinations(piece, board),
        PieceKind::Bishop => bishop_destinations(piece, board),
        PieceKind::Rook => rook_destinations(piece, board),
        PieceKind::Queen => queen_destinations(piece, board),
        PieceKind::King(_) => king_destinations(piece, board),
        PieceKind::Powerup => Vec::new(),
    }
}

/// Destinations of whatever stands on `at`.
///
/// For a king this also stores its `in_check`/`in_checkmate` flags.
pub fn legal_destinations(board: &mut Board, at: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
    let piece = *board.piece_at(at).ok_or(ChessErrors::EmptySourceSquare(at))?;
    let moves = piece_destinations(&piece, board);

    if piece.is_king() {
        let status = king_status(&piece, board, &moves);
        if let Some(state) = board.piece_at_mut(at).and_then(|p| p.king_state_mut()) {
            state.in_check = status.in_check;
            state.in_checkmate = status.in_checkmate;
        }
    }

    Ok(moves)
}

/// Result of clicking a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Selected(Vec<Coordinate>),
    Cleared,
}

/// Selects `at`, or clears the selection if `at` is already selected.
pub fn select_square(board: &mut Board, at: Coordinate) -> Result<Selection, ChessErrors> {
    if board.selected() == Some(at) {
        board.clear_selection();
        trace!("selection at {at} cleared");
        return Ok(Selection::Cleared);
    }
    refresh_selection(board, at).map(Selection::Selected)
}

/// Drops the current selection, if any.
pub fn deselect(board: &mut Board) {
    board.clear_selection();
}

/// Selects `at` and caches its destinations for `execute_move`.
pub fn refresh_selection(board: &mut Board, at: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
    let piece = board.piece_at(at).ok_or(ChessErrors::EmptySourceSquare(at))?;
    if piece.is_pickup() {
        return Err(ChessErrors::ImmovablePiece(at));
    }

    let moves = legal_destinations(board, at)?;
    trace!("selected {at}: {} destinations", moves.len());
    board.selected = Some(at);
    board.selected_moves = Some(moves.clone());
    Ok(moves)
}

/// Every (source, destination) pair available to `color`.
///
/// Refreshes the attacked cache for `color` first.
pub fn legal_moves_for(board: &mut Board, color: Color) -> Vec<(Coordinate, Coordinate)> {
    recompute_attacked(board, color);
    let sources: Vec<Coordinate> = board
        .pieces()
        .filter(|p| p.color == color)
        .map(|p| p.location)
        .collect();

    let mut out = Vec::with_capacity(64);
    for from in sources {
        if let Ok(moves) = legal_destinations(board, from) {
            out.extend(moves.into_iter().map(|to| (from, to)));
        }
    }
    out
}
