//! One game between two players.
//!
//! `GameSession` is what an outer layer (HTTP handler, terminal loop, bot)
//! holds per game. It enforces turn ownership, keeps the attacked-square
//! cache fresh around every query and move, and decides when the game ends.
//! Keeping many sessions (for example in a map keyed by game id) and
//! serializing access to each one is the caller's job.

use log::{debug, info};

use crate::board_location::Coordinate;
use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_apply::execute_move;
use crate::move_generation::legal_move_checks::{eliminated_side, recompute_attacked, refresh_king_status};
use crate::move_generation::legal_move_generator::{
    deselect, legal_moves_for, refresh_selection, select_square, Selection,
};
use crate::move_generation::move_outcome::MoveOutcome;
use crate::moves::king_moves::KingStatus;
use crate::powerups::spawner::PowerupConfig;

/// Everything a caller needs after a move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    /// Side to move after this move.
    pub side_to_move: Color,
    /// Check state of the side to move.
    pub status: KingStatus,
    pub game_over: bool,
    pub winner: Option<Color>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    winner: Option<Color>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard starting position, white to move.
    pub fn new() -> Self {
        Self::from_board(Board::new_game())
    }

    pub fn with_seed(seed: u64, config: PowerupConfig) -> Self {
        Self::from_board(Board::with_seed(seed, config))
    }

    /// Wraps a prepared board, for custom positions.
    pub fn from_board(board: Board) -> Self {
        Self { board, winner: None }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    /// Selects one of the mover's pieces and returns its destinations.
    pub fn select(&mut self, at: Coordinate) -> Result<Vec<Coordinate>, ChessErrors> {
        self.prepare_selection(at)?;
        refresh_selection(&mut self.board, at)
    }

    /// Click semantics: selecting the selected square again clears it.
    pub fn toggle_select(&mut self, at: Coordinate) -> Result<Selection, ChessErrors> {
        if self.board.is_game_over() {
            return Err(ChessErrors::GameAlreadyOver);
        }
        if self.board.selected() != Some(at) {
            self.prepare_selection(at)?;
        }
        select_square(&mut self.board, at)
    }

    /// Ownership checks plus a fresh attacked pass for the side to move.
    fn prepare_selection(&mut self, at: Coordinate) -> Result<(), ChessErrors> {
        if self.board.is_game_over() {
            return Err(ChessErrors::GameAlreadyOver);
        }
        let side = self.board.side_to_move();
        let piece = self.board.piece_at(at).ok_or(ChessErrors::EmptySourceSquare(at))?;
        if piece.is_pickup() {
            return Err(ChessErrors::ImmovablePiece(at));
        }
        if piece.color != side {
            return Err(ChessErrors::NotYourPiece(at, side));
        }

        recompute_attacked(&mut self.board, side);
        Ok(())
    }

    pub fn deselect(&mut self) {
        deselect(&mut self.board);
    }

    /// Every move available to the side to move.
    pub fn legal_moves(&mut self) -> Vec<(Coordinate, Coordinate)> {
        if self.board.is_game_over() {
            return Vec::new();
        }
        let side = self.board.side_to_move();
        legal_moves_for(&mut self.board, side)
    }

    /// Validates and plays `from` -> `to`, then evaluates the new position.
    pub fn make_move(&mut self, from: Coordinate, to: Coordinate) -> Result<MoveReport, ChessErrors> {
        let moves = self.select(from)?;
        if !moves.contains(&to) {
            deselect(&mut self.board);
            return Err(ChessErrors::IllegalDestination { from, to });
        }

        let outcome = match execute_move(&mut self.board, from, to) {
            Ok(outcome) => outcome,
            Err(err) => {
                deselect(&mut self.board);
                return Err(err);
            }
        };
        let side = self.board.side_to_move();
        let status = refresh_king_status(&mut self.board, side).unwrap_or_default();

        if let Some(loser) = eliminated_side(&self.board) {
            self.finish(loser.opposite());
        } else if status.in_checkmate {
            self.finish(outcome.color);
        }

        let message = describe(&outcome, status, self.winner);
        debug!("{} {} -> {}: {message}", outcome.color.name(), from, to);

        Ok(MoveReport {
            outcome,
            side_to_move: side,
            status,
            game_over: self.board.is_game_over(),
            winner: self.winner,
            message,
        })
    }

    fn finish(&mut self, winner: Color) {
        self.winner = Some(winner);
        self.board.end_game();
        info!("game over, {} wins after {} turns", winner.name(), self.board.total_turns());
    }
}

fn capitalized(color: Color) -> String {
    let name = color.name();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Short human-readable summary of a move.
pub fn describe(outcome: &MoveOutcome, status: KingStatus, winner: Option<Color>) -> String {
    if let Some(winner) = winner {
        return match outcome.destroyed_king.or_else(|| {
            outcome
                .king_hits
                .iter()
                .find(|hit| hit.lives_remaining == 0)
                .map(|hit| hit.color)
        }) {
            Some(loser) => format!(
                "Game Over! {} wins! {} king eliminated.",
                capitalized(winner),
                capitalized(loser)
            ),
            None => format!("Checkmate! {} wins!", capitalized(winner)),
        };
    }

    let mut parts: Vec<String> = Vec::new();
    for hit in &outcome.king_hits {
        parts.push(format!(
            "{} king lost 1 life! ({} remaining)",
            capitalized(hit.color),
            hit.lives_remaining
        ));
    }
    if let Some(class) = outcome.converted {
        parts.push(format!("{} converted", class.name()));
    }
    if let Some(captured) = outcome.captured {
        parts.push(format!("{} {} captured", captured.color.name(), captured.class().name()));
    }
    if !outcome.blasted.is_empty() {
        parts.push(format!("blast destroyed {} piece(s)", outcome.blasted.len()));
    }
    if outcome.powerup_collected {
        parts.push("Power-up collected!".to_string());
    }
    if let Some(class) = outcome.promoted_to {
        parts.push(format!("pawn promoted to {}", class.name()));
    }
    if status.in_check {
        parts.push("Check!".to_string());
    }

    if parts.is_empty() {
        "Move successful".to_string()
    } else {
        parts.join(" - ")
    }
}
