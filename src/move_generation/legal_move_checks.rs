//! Attacked-square computation and king safety.
//!
//! The `attacked` flags are a cache the caller refreshes explicitly. Nothing
//! invalidates them when the board changes: call `recompute_attacked` after
//! every move and before any query that depends on king safety.

use log::{debug, trace};

use crate::board_location::Coordinate;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::{legal_destinations, piece_destinations};
use crate::moves::king_moves::KingStatus;

/// Marks every square some piece not of `defending` could move to.
///
/// All destinations are collected against a cleared cache before any flag is
/// written, so the result is exactly the union of the attackers' destinations.
pub fn recompute_attacked(board: &mut Board, defending: Color) {
    board.clear_attacked();

    let view: &Board = board;
    let targets: Vec<Coordinate> = view
        .pieces()
        .filter(|p| p.color != defending)
        .flat_map(|p| piece_destinations(p, view))
        .collect();

    for target in &targets {
        board.mark_attacked(*target);
    }
    board.attacked_for = Some(defending);

    trace!(
        "attacked squares against {}: {}",
        defending.name(),
        board.attacked_mask().count_ones()
    );
}

/// Currently flagged squares.
pub fn attacked_squares(board: &Board) -> Vec<Coordinate> {
    Coordinate::all().filter(|c| board.is_attacked(*c)).collect()
}

/// Refreshes the attacked cache for `color` and stores its king's check flags.
///
/// Returns `None` when `color` has no king on the board.
pub fn refresh_king_status(board: &mut Board, color: Color) -> Option<KingStatus> {
    recompute_attacked(board, color);
    let at = board.king(color)?.location;
    legal_destinations(board, at).ok()?;

    let state = board.king(color)?.king_state()?;
    let status = KingStatus {
        in_check: state.in_check,
        in_checkmate: state.in_checkmate,
    };
    if status.in_check {
        debug!(
            "{} king at {at} in check{}",
            color.name(),
            if status.in_checkmate { " (checkmate)" } else { "" }
        );
    }
    Some(status)
}

/// The side that has lost its king outright: removed from the board or left with no lives.
pub fn eliminated_side(board: &Board) -> Option<Color> {
    [Color::White, Color::Black].into_iter().find(|&color| {
        board
            .king(color)
            .and_then(|k| k.lives_remaining())
            .map_or(true, |lives| lives == 0)
    })
}
