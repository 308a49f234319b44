//! Move execution.
//!
//! `execute_move` is the only way pieces change squares. It validates the
//! move against the cached selection first and leaves the board untouched on
//! any error. A successful move runs, in order: powered-bishop conversion, or
//! king strike, or ordinary relocation (with knight/rook powerup effects and
//! powerup collection), and then turn bookkeeping with pickup spawning.

use log::debug;

use crate::board_location::Coordinate;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::ORTHOGONALS;
use crate::game_state::chess_types::{Piece, PieceClass, PieceKind};
use crate::move_generation::move_outcome::{KingHit, MoveOutcome};
use crate::moves::knight_moves::is_standard_jump;

/// Executes the selected piece's move from `from` to `to`.
///
/// `from` must be the current selection and `to` one of its cached
/// destinations (see `refresh_selection`), and the piece must belong to the
/// side to move.
pub fn execute_move(
    board: &mut Board,
    from: Coordinate,
    to: Coordinate,
) -> Result<MoveOutcome, ChessErrors> {
    if board.selected() != Some(from) {
        return Err(ChessErrors::NoSelection);
    }
    if !board.selected_moves().is_some_and(|moves| moves.contains(&to)) {
        return Err(ChessErrors::IllegalDestination { from, to });
    }
    let mover = *board.piece_at(from).ok_or(ChessErrors::EmptySourceSquare(from))?;
    if mover.color != board.side_to_move() {
        return Err(ChessErrors::NotYourPiece(from, board.side_to_move()));
    }

    board.clear_selection();
    let mut outcome = MoveOutcome::new(&mover, to);
    let target = board.piece_at(to).copied();

    match target {
        Some(victim) if is_conversion(&mover, &victim) => convert(board, &mover, &victim, &mut outcome),
        Some(victim) if victim.is_king() => strike_king(board, mover, victim, &mut outcome),
        _ => relocate(board, mover, target, &mut outcome),
    }

    finish_turn(board, &mut outcome);
    Ok(outcome)
}

fn is_conversion(mover: &Piece, victim: &Piece) -> bool {
    matches!(mover.kind, PieceKind::Bishop) && mover.has_powerup && victim.is_opponent_of(mover.color)
}

/// Powered bishop: recolor an opposing piece, or take a life from a king. The bishop stays put.
fn convert(board: &mut Board, bishop: &Piece, victim: &Piece, outcome: &mut MoveOutcome) {
    if victim.is_king() {
        hit_king(board, victim.location, outcome);
        return;
    }

    if let Some(piece) = board.piece_at_mut(victim.location) {
        piece.color = bishop.color;
    }
    if let Some(piece) = board.piece_at_mut(bishop.location) {
        piece.has_powerup = false;
    }
    outcome.converted = Some(victim.class());
    debug!(
        "{} bishop at {} converts {} at {}",
        bishop.color.name(),
        bishop.location,
        victim.class().name(),
        victim.location
    );
}

/// Landing on a king costs it a life. Only a king with no lives left is taken.
fn strike_king(board: &mut Board, mover: Piece, king: Piece, outcome: &mut MoveOutcome) {
    let lives = hit_king(board, king.location, outcome);

    if lives > 0 {
        if let Some(piece) = board.piece_at_mut(mover.location) {
            piece.has_powerup = false;
        }
        return;
    }

    outcome.captured = board.take_piece(king.location);
    outcome.destroyed_king = Some(king.color);
    debug!("{} king destroyed at {}", king.color.name(), king.location);

    if let Some(mut piece) = board.take_piece(mover.location) {
        piece.location = king.location;
        piece.has_powerup = false;
        piece.mark_moved();
        board.put_piece(piece);
        outcome.relocated = true;
    }
}

fn relocate(board: &mut Board, mover: Piece, target: Option<Piece>, outcome: &mut MoveOutcome) {
    let from = mover.location;
    let to = outcome.to;

    // Lift the mover off its square first so a blast never reaches it.
    let Some(mut piece) = board.take_piece(from) else {
        return;
    };
    piece.location = to;
    let had_powerup = piece.has_powerup;

    let keeps_powerup = matches!(piece.kind, PieceKind::Knight)
        && had_powerup
        && board.config().knight_keeps_powerup_on_standard_moves
        && is_standard_jump(
            to.rank() as i8 - from.rank() as i8,
            to.file() as i8 - from.file() as i8,
        );

    if matches!(piece.kind, PieceKind::Rook) && had_powerup && target.is_some() {
        blast(board, to, outcome);
    }

    piece.has_powerup = keeps_powerup;

    if let Some(victim) = target {
        if !victim.is_pickup() {
            outcome.captured = Some(victim);
        }
    }

    // Collect whatever powerup stood on the destination.
    let gains = target.is_some_and(|victim| victim.has_powerup);
    outcome.powerup_collected = gains;

    if piece.class() == PieceClass::Pawn && (gains || had_powerup) {
        let class = board.spawner.promotion_class();
        debug!("{} pawn promotes to {} at {to}", piece.color.name(), class.name());
        piece = Piece::new(class, piece.color, to);
        outcome.promoted_to = Some(class);
    } else if gains {
        match piece.king_state_mut() {
            Some(state) => state.lives_remaining = state.lives_remaining.saturating_add(1),
            None => piece.has_powerup = true,
        }
    }

    piece.mark_moved();
    board.put_piece(piece);
    outcome.relocated = true;
}

/// Powered rook capture: clears the four orthogonal neighbours of `center`.
/// Kings lose a life instead of being removed.
fn blast(board: &mut Board, center: Coordinate, outcome: &mut MoveOutcome) {
    for (d_rank, d_file) in ORTHOGONALS {
        let Some(target) = center.offset(d_rank, d_file) else {
            continue;
        };
        let is_king = match board.piece_at(target) {
            None => continue,
            Some(piece) => piece.is_king(),
        };
        if is_king {
            hit_king(board, target, outcome);
        } else if let Some(removed) = board.take_piece(target) {
            debug!("blast at {center} removes {} at {target}", removed.class().name());
            outcome.blasted.push(removed);
        }
    }
}

/// Takes one life from the king on `at` and returns what is left.
fn hit_king(board: &mut Board, at: Coordinate, outcome: &mut MoveOutcome) -> u8 {
    let Some(king) = board.piece_at_mut(at) else {
        return 0;
    };
    let color = king.color;
    let Some(state) = king.king_state_mut() else {
        return 0;
    };
    state.lives_remaining = state.lives_remaining.saturating_sub(1);
    let lives_remaining = state.lives_remaining;

    debug!("{} king at {at} hit, {lives_remaining} lives left", color.name());
    outcome.king_hits.push(KingHit {
        color,
        location: at,
        lives_remaining,
    });
    lives_remaining
}

fn finish_turn(board: &mut Board, outcome: &mut MoveOutcome) {
    board.advance_turn();

    let turns = board.total_turns();
    if board.spawner.should_spawn(turns) {
        let empty = board.empty_squares();
        if let Some(at) = board.spawner.choose_square(&empty) {
            board.put_piece(Piece::pickup(at));
            outcome.spawned_pickup = Some(at);
            debug!("pickup spawned at {at} on turn {turns}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::legal_move_checks::recompute_attacked;
    use crate::move_generation::legal_move_generator::refresh_selection;
    use crate::powerups::spawner::PowerupConfig;

    fn at(rank: u8, file: u8) -> Coordinate {
        Coordinate::new(rank, file).expect("test coordinate should be valid")
    }

    fn play(board: &mut Board, from: Coordinate, to: Coordinate) -> MoveOutcome {
        let side = board.side_to_move();
        recompute_attacked(board, side);
        refresh_selection(board, from).expect("source should be selectable");
        execute_move(board, from, to).expect("move should be legal")
    }

    fn lone_kings(board: &mut Board) {
        board.add_piece(Color::White, PieceClass::King, at(7, 7)).expect("empty square");
        board.add_piece(Color::Black, PieceClass::King, at(0, 0)).expect("empty square");
    }

    #[test]
    fn rejects_moves_without_selection_or_off_list() {
        let mut board = Board::with_seed(0, PowerupConfig::disabled());
        assert_eq!(
            execute_move(&mut board, at(6, 4), at(4, 4)).err(),
            Some(ChessErrors::NoSelection)
        );

        refresh_selection(&mut board, at(6, 4)).expect("pawn");
        assert_eq!(
            execute_move(&mut board, at(6, 4), at(3, 4)).err(),
            Some(ChessErrors::IllegalDestination { from: at(6, 4), to: at(3, 4) })
        );
        assert!(board.piece_at(at(6, 4)).is_some());
        assert_eq!(board.total_turns(), 0);
        assert_eq!(board.side_to_move(), Color::White);
    }

    #[test]
    fn rejects_opponent_piece() {
        let mut board = Board::with_seed(0, PowerupConfig::disabled());
        refresh_selection(&mut board, at(1, 4)).expect("black pawn");
        assert_eq!(
            execute_move(&mut board, at(1, 4), at(3, 4)).err(),
            Some(ChessErrors::NotYourPiece(at(1, 4), Color::White))
        );
        assert!(board.piece_at(at(1, 4)).is_some());
    }

    #[test]
    fn ordinary_move_advances_turn() {
        let mut board = Board::with_seed(0, PowerupConfig::disabled());
        let outcome = play(&mut board, at(6, 4), at(4, 4));
        assert!(outcome.relocated);
        assert!(board.piece_at(at(6, 4)).is_none());
        let pawn = board.piece_at(at(4, 4)).expect("pawn moved");
        assert_eq!(pawn.location, at(4, 4));
        assert_eq!(pawn.has_moved(), Some(true));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.total_turns(), 1);
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn powered_bishop_converts_instead_of_capturing() {
        let mut board = Board::empty(0, PowerupConfig::disabled());
        lone_kings(&mut board);
        board.add_piece(Color::White, PieceClass::Bishop, at(7, 2)).expect("empty square");
        board.add_piece(Color::Black, PieceClass::Rook, at(4, 5)).expect("empty square");
        board.grant_powerup(at(7, 2)).expect("bishop");

        let outcome = play(&mut board, at(7, 2), at(4, 5));
        assert_eq!(outcome.converted, Some(PieceClass::Rook));
        assert!(!outcome.relocated);
        let bishop = board.piece_at(at(7, 2)).expect("bishop stays");
        assert!(!bishop.has_powerup);
        let rook = board.piece_at(at(4, 5)).expect("rook stays");
        assert_eq!(rook.color, Color::White);
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn powered_bishop_hits_king_once() {
        let mut board = Board::empty(0, PowerupConfig::disabled());
        lone_kings(&mut board);
        board.add_piece(Color::White, PieceClass::Bishop, at(3, 3)).expect("empty square");
        board.grant_powerup(at(3, 3)).expect("bishop");

        let outcome = play(&mut board, at(3, 3), at(0, 0));
        assert_eq!(outcome.king_hits.len(), 1);
        assert_eq!(board.piece_at(at(0, 0)).and_then(|k| k.lives_remaining()), Some(2));
        assert!(board.piece_at(at(3, 3)).is_some_and(|b| b.has_powerup));
    }

    #[test]
    fn king_survives_capture_while_lives_remain() {
        let mut board = Board::empty(0, PowerupConfig::disabled());
        lone_kings(&mut board);
        board.add_piece(Color::White, PieceClass::Rook, at(0, 7)).expect("empty square");
        board.grant_powerup(at(0, 7)).expect("rook");

        let outcome = play(&mut board, at(0, 7), at(0, 0));
        assert!(!outcome.relocated);
        assert_eq!(outcome.destroyed_king, None);
        assert_eq!(board.piece_at(at(0, 0)).and_then(|k| k.lives_remaining()), Some(2));
        let rook = board.piece_at(at(0, 7)).expect("rook stays home");
        assert!(!rook.has_powerup);
    }

    #[test]
    fn last_life_king_is_taken() {
        let mut board = Board::empty(0, PowerupConfig::disabled());
        lone_kings(&mut board);
        board.add_piece(Color::White, PieceClass::Rook, at(0, 7)).expect("empty square");
        if let Some(state) = board.piece_at_mut(at(0, 0)).and_then(|k| k.king_state_mut()) {
            state.lives_remaining = 1;
        }

        let outcome = play(&mut board, at(0, 7), at(0, 0));
        assert_eq!(outcome.destroyed_king, Some(Color::Black));
        assert!(board.king(Color::Black).is_none());
        let rook = board.piece_at(at(0, 0)).expect("rook took the square");
        assert_eq!(rook.class(), PieceClass::Rook);
        assert_eq!(rook.location, at(0, 0));
        assert!(board.piece_at(at(0, 7)).is_none());
    }

    #[test]
    fn powered_rook_blast_clears_neighbours_and_hurts_kings() {
        let mut board = Board::empty(0, PowerupConfig::disabled());
        board.add_piece(Color::White, PieceClass::King, at(7, 7)).expect("empty square");
        board.add_piece(Color::Black, PieceClass::King, at(3, 4)).expect("empty square");
        board.add_piece(Color::White, PieceClass::Rook, at(7, 3)).expect("empty square");
        board.add_piece(Color::Black, PieceClass::Knight, at(3, 3)).expect("empty square");
        board.add_piece(Color::Black, PieceClass::Pawn, at(2, 3)).expect("empty square");
        board.add_piece(Color::White, PieceClass::Pawn, at(3, 2)).expect("empty square");
        board.add_piece(Color::Black, PieceClass::Bishop, at(2, 2)).expect("empty square");
        board.grant_powerup(at(7, 3)).expect("rook");

        let outcome = play(&mut board, at(7, 3), at(3, 3));
        assert_eq!(outcome.captured.map(|p| p.class()), Some(PieceClass::Knight));
        assert_eq!(outcome.blasted.len(), 2);
        assert!(board.piece_at(at(2, 3)).is_none());
        assert!(board.piece_at(at(3, 2)).is_none());
        assert!(board.piece_at(at(2, 2)).is_some(), "diagonal neighbours survive");
        assert_eq!(board.piece_at(at(3, 4)).and_then(|k| k.lives_remaining()), Some(2));

        let rook = board.piece_at(at(3, 3)).expect("rook landed");
        assert_eq!(rook.class(), PieceClass::Rook);
        assert!(!rook.has_powerup);
    }

    #[test]
    fn knight_collects_pickup() {
        let mut board = Board::with_seed(0, PowerupConfig::disabled());
        board.place_pickup(at(5, 2)).expect("empty square");
        let outcome = play(&mut board, at(7, 1), at(5, 2));
        assert!(outcome.powerup_collected);
        assert_eq!(outcome.captured, None);
        let knight = board.piece_at(at(5, 2)).expect("knight");
        assert_eq!(knight.class(), PieceClass::Knight);
        assert!(knight.has_powerup);
    }

    #[test]
    fn king_collecting_pickup_gains_a_life() {
        let mut board = Board::empty(0, PowerupConfig::disabled());
        lone_kings(&mut board);
        board.place_pickup(at(6, 6)).expect("empty square");
        play(&mut board, at(7, 7), at(6, 6));
        let king = board.piece_at(at(6, 6)).expect("king moved");
        assert_eq!(king.lives_remaining(), Some(4));
        assert!(!king.has_powerup);
        assert_eq!(king.has_moved(), Some(true));
    }

    #[test]
    fn powered_knight_spends_powerup_by_default() {
        let mut board = Board::with_seed(0, PowerupConfig::disabled());
        board.grant_powerup(at(7, 1)).expect("knight");
        play(&mut board, at(7, 1), at(5, 2));
        assert!(board.piece_at(at(5, 2)).is_some_and(|n| !n.has_powerup));
    }

    #[test]
    fn knight_retention_is_configurable() {
        let config = PowerupConfig {
            knight_keeps_powerup_on_standard_moves: true,
            ..PowerupConfig::disabled()
        };
        let mut board = Board::empty(0, config);
        lone_kings(&mut board);
        board.add_piece(Color::White, PieceClass::Knight, at(4, 3)).expect("empty square");
        board.grant_powerup(at(4, 3)).expect("knight");

        play(&mut board, at(4, 3), at(2, 4));
        assert!(board.piece_at(at(2, 4)).is_some_and(|n| n.has_powerup));

        play(&mut board, at(0, 0), at(0, 1));
        play(&mut board, at(2, 4), at(2, 6));
        assert!(board.piece_at(at(2, 6)).is_some_and(|n| !n.has_powerup));
    }

    #[test]
    fn pawn_collecting_pickup_is_promoted() {
        let mut board = Board::with_seed(5, PowerupConfig::disabled());
        board.place_pickup(at(5, 4)).expect("empty square");
        let outcome = play(&mut board, at(6, 4), at(5, 4));
        let class = outcome.promoted_to.expect("pawn should promote");
        assert!(matches!(
            class,
            PieceClass::Queen | PieceClass::Rook | PieceClass::Bishop | PieceClass::Knight
        ));
        let piece = board.piece_at(at(5, 4)).expect("promoted piece");
        assert_eq!(piece.class(), class);
        assert_eq!(piece.color, Color::White);
        assert!(!piece.has_powerup);
    }

    #[test]
    fn pickups_spawn_after_the_delay() {
        let config = PowerupConfig {
            delay_turns: 1,
            spawn_chance: 1.0,
            ..PowerupConfig::default()
        };
        let mut board = Board::with_seed(9, config);
        let first = play(&mut board, at(6, 4), at(4, 4));
        assert_eq!(first.spawned_pickup, None);

        let second = play(&mut board, at(1, 4), at(3, 4));
        let spot = second.spawned_pickup.expect("pickup should spawn on turn 2");
        let token = board.piece_at(spot).expect("pickup placed");
        assert!(token.is_pickup());
        assert_eq!(board.pieces().filter(|p| p.is_pickup()).count(), 1);
    }
}
