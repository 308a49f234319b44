//! Board state for powerup chess.
//!
//! `Board` stores the 8x8 grid, both player seats, the side to move, the
//! current selection and its cached destinations, the turn counter, the
//! game-over flag and the powerup spawner. Rules that read or change the
//! board live in `move_generation`; this module only owns the data and its
//! low-level accessors.

use std::fmt;

use log::trace;

use crate::board_location::Coordinate;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::player::Player;
use crate::game_state::square::Square;
use crate::powerups::spawner::{PowerupConfig, PowerupSpawner};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone)]
pub struct Board {
    squares: [Square; 64],
    players: [Player; 2],
    side_to_move: Color,
    pub(crate) selected: Option<Coordinate>,
    pub(crate) selected_moves: Option<Vec<Coordinate>>,
    total_turns: u32,
    game_over: bool,
    /// Side the `attacked` flags were last computed for.
    pub(crate) attacked_for: Option<Color>,
    pub(crate) spawner: PowerupSpawner,
}

impl Board {
    /// Standard starting position with default powerup settings, seeded from the OS.
    pub fn new_game() -> Self {
        Self::with_spawner(PowerupSpawner::new(PowerupConfig::default())).with_standard_layout()
    }

    /// Standard starting position with a reproducible spawner.
    pub fn with_seed(seed: u64, config: PowerupConfig) -> Self {
        Self::with_spawner(PowerupSpawner::with_seed(config, seed)).with_standard_layout()
    }

    /// No pieces at all; white to move. Used for custom setups.
    pub fn empty(seed: u64, config: PowerupConfig) -> Self {
        Self::with_spawner(PowerupSpawner::with_seed(config, seed))
    }

    fn with_spawner(spawner: PowerupSpawner) -> Self {
        let mut white = Player::new(Color::White);
        white.turn = true;
        Self {
            squares: [Square::default(); 64],
            players: [white, Player::new(Color::Black)],
            side_to_move: Color::White,
            selected: None,
            selected_moves: None,
            total_turns: 0,
            game_over: false,
            attacked_for: None,
            spawner,
        }
    }

    fn with_standard_layout(mut self) -> Self {
        for at in Coordinate::all() {
            let back = BACK_RANK[at.file() as usize];
            let start = match at.rank() {
                WHITE_BACK_RANK => Some((back, Color::White)),
                WHITE_PAWN_RANK => Some((PieceClass::Pawn, Color::White)),
                BLACK_PAWN_RANK => Some((PieceClass::Pawn, Color::Black)),
                BLACK_BACK_RANK => Some((back, Color::Black)),
                _ => None,
            };
            if let Some((class, color)) = start {
                self.put_piece(Piece::new(class, color, at));
            }
        }
        self
    }

    // --- Setup ---

    /// Places a fresh piece on an empty square.
    pub fn add_piece(
        &mut self,
        color: Color,
        class: PieceClass,
        at: Coordinate,
    ) -> Result<&Piece, ChessErrors> {
        if !self.square(at).is_empty() {
            return Err(ChessErrors::SquareOccupied(at));
        }
        self.put_piece(Piece::new(class, color, at));
        self.piece_at(at).ok_or(ChessErrors::EmptySourceSquare(at))
    }

    /// Places a neutral pickup marker on an empty square.
    pub fn place_pickup(&mut self, at: Coordinate) -> Result<(), ChessErrors> {
        self.add_piece(Color::Pickup, PieceClass::Powerup, at).map(|_| ())
    }

    /// Sets the powerup flag of the piece on `at`.
    pub fn grant_powerup(&mut self, at: Coordinate) -> Result<(), ChessErrors> {
        let piece = self.piece_at_mut(at).ok_or(ChessErrors::EmptySourceSquare(at))?;
        piece.has_powerup = true;
        Ok(())
    }

    /// Removes and returns whatever stands on `at`.
    pub fn remove_piece(&mut self, at: Coordinate) -> Option<Piece> {
        self.take_piece(at)
    }

    // --- Read accessors ---

    #[inline]
    pub fn square(&self, at: Coordinate) -> &Square {
        &self.squares[at.index()]
    }

    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Option<&Piece> {
        self.squares[at.index()].piece()
    }

    #[inline]
    pub fn is_attacked(&self, at: Coordinate) -> bool {
        self.squares[at.index()].attacked
    }

    /// Side whose perspective the `attacked` flags currently describe.
    pub fn attacked_for(&self) -> Option<Color> {
        self.attacked_for
    }

    /// Attacked squares as a bitboard, bit `index()` per square.
    pub fn attacked_mask(&self) -> u64 {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| sq.attacked)
            .fold(0u64, |mask, (i, _)| mask | (1u64 << i))
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().filter_map(|sq| sq.piece())
    }

    pub fn empty_squares(&self) -> Vec<Coordinate> {
        Coordinate::all().filter(|c| self.square(*c).is_empty()).collect()
    }

    pub fn king(&self, color: Color) -> Option<&Piece> {
        self.pieces().find(|p| p.is_king() && p.color == color)
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 1 when white is to move, 2 when black is.
    pub fn players_turn(&self) -> u8 {
        self.side_to_move.player_number().unwrap_or(1)
    }

    pub fn player(&self, color: Color) -> Option<&Player> {
        self.players.iter().find(|p| p.color == color)
    }

    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    pub fn selected_moves(&self) -> Option<&[Coordinate]> {
        self.selected_moves.as_deref()
    }

    pub fn total_turns(&self) -> u32 {
        self.total_turns
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> &PowerupConfig {
        self.spawner.config()
    }

    // --- Crate-internal mutation used by the rules ---

    #[inline]
    pub(crate) fn piece_at_mut(&mut self, at: Coordinate) -> Option<&mut Piece> {
        self.squares[at.index()].piece.as_mut()
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, at: Coordinate) -> Option<Piece> {
        self.squares[at.index()].piece.take()
    }

    /// Puts `piece` on the square its own `location` names, replacing any occupant.
    #[inline]
    pub(crate) fn put_piece(&mut self, piece: Piece) {
        self.squares[piece.location.index()].piece = Some(piece);
    }

    pub(crate) fn clear_attacked(&mut self) {
        for sq in self.squares.iter_mut() {
            sq.attacked = false;
        }
        self.attacked_for = None;
    }

    pub(crate) fn mark_attacked(&mut self, at: Coordinate) {
        self.squares[at.index()].attacked = true;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
        self.selected_moves = None;
    }

    pub(crate) fn advance_turn(&mut self) {
        self.total_turns = self.total_turns.saturating_add(1);
        self.side_to_move = self.side_to_move.opposite();
        for player in self.players.iter_mut() {
            player.turn = player.color == self.side_to_move;
        }
        trace!(
            "turn {} complete, {} to move",
            self.total_turns,
            self.side_to_move.name()
        );
    }

    pub(crate) fn end_game(&mut self) {
        self.game_over = true;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
