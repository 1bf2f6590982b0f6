//! Turn state machine for a single Othello game.
//!
//! A turn runs suggest -> select -> capture -> flip -> score -> advance.
//! Every check on a chosen move happens before the board is touched, so a
//! rejected move never leaves a partial mutation behind.

use crate::action::Move;
use crate::board::Board;
use crate::error::OthelloError;
use crate::invariants::assert_invariants;
use crate::phases::{GameStatus, Outcome};
use crate::rules;
use crate::types::{BOARD_SIZE, Color, Piece, Position};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Complete state of one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    board: Board,
    turn_number: u32,
    player1_score: u32,
    player2_score: u32,
    current_player: Color,
}

impl GameState {
    /// Starts a fresh game with black's suggestions already on the board.
    #[instrument]
    pub fn new_game() -> Self {
        let mut game = Self {
            board: Board::new(),
            turn_number: 0,
            player1_score: 2,
            player2_score: 2,
            current_player: Color::Black,
        };
        game.refresh_suggestions();
        info!("New game created");
        game
    }

    /// Assembles a state from loaded parts; suggestions are recomputed.
    pub(crate) fn from_parts(
        board: Board,
        turn_number: u32,
        player1_score: u32,
        player2_score: u32,
        current_player: Color,
    ) -> Self {
        let mut game = Self {
            board,
            turn_number,
            player1_score,
            player2_score,
            current_player,
        };
        game.refresh_suggestions();
        game
    }

    /// Clears old suggestions and marks every legal cell for the current player.
    ///
    /// Idempotent: running it twice yields the same suggestion set.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn refresh_suggestions(&mut self) {
        self.board.clear_suggestions();
        for pos in rules::legal_moves(&self.board, self.current_player) {
            // Legal cells are empty, so this cannot hit a placed piece.
            if let Err(error) = self.board.place_at(pos, Piece::suggestion(self.current_player)) {
                warn!(%pos, %error, "Could not place suggestion");
            }
        }
        debug!(
            count = self.board.count_suggestions(self.current_player),
            "Suggestions placed"
        );
    }

    /// True once the board is full, a player has no pieces, or the player to
    /// move has no legal cell.
    pub fn is_finished(&self) -> bool {
        self.board.placed_total() == BOARD_SIZE * BOARD_SIZE
            || self.player1_score == 0
            || self.player2_score == 0
            || self.board.count_suggestions(self.current_player) == 0
    }

    /// Current phase, with the outcome once finished.
    pub fn status(&self) -> GameStatus {
        if self.is_finished() {
            GameStatus::Finished(Outcome::from_scores(self.player1_score, self.player2_score))
        } else {
            GameStatus::InProgress
        }
    }

    /// The outcome, if the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            GameStatus::Finished(outcome) => Some(outcome),
            GameStatus::InProgress => None,
        }
    }

    /// The winning color, if the game is finished and not drawn.
    pub fn winner(&self) -> Option<Color> {
        self.outcome().and_then(|outcome| outcome.winner())
    }

    /// Plays the current player's piece at `(row, col)` and advances the turn.
    ///
    /// # Errors
    ///
    /// - [`OthelloError::OutOfRange`] for a coordinate off the board
    /// - [`OthelloError::GameOver`] once the game is finished
    /// - [`OthelloError::InvalidMove`] unless the cell holds one of the
    ///   current player's suggestions
    /// - [`OthelloError::TurnLimit`] when the turn counter cannot advance
    ///
    /// The state is unchanged on error.
    #[instrument(skip(self), fields(player = %self.current_player, turn = self.turn_number))]
    pub fn play_turn(&mut self, row: usize, col: usize) -> Result<Move, OthelloError> {
        let pos = Position::new(row, col)?;

        if self.is_finished() {
            warn!("Move attempted after game over");
            return Err(OthelloError::GameOver);
        }

        if !rules::is_chosen_move_valid(&self.board, self.current_player, pos) {
            warn!(%pos, "Rejected move without suggestion");
            return Err(OthelloError::InvalidMove { row, col });
        }

        let next_turn = self.turn_number.checked_add(1).ok_or_else(|| {
            warn!("Turn counter exhausted");
            OthelloError::TurnLimit {
                turn: self.turn_number,
            }
        })?;

        let applied = self.apply_move(pos);
        self.advance(next_turn);

        assert_invariants(self);

        info!(
            %applied,
            player1_score = self.player1_score,
            player2_score = self.player2_score,
            finished = self.is_finished(),
            "Turn played"
        );
        Ok(applied)
    }

    /// Flips every captured line, then promotes the chosen suggestion.
    fn apply_move(&mut self, pos: Position) -> Move {
        let player = self.current_player;
        let lines = rules::capture_lines(&self.board, player, pos);

        let mut flipped = Vec::new();
        for direction in lines.directions() {
            let mut next = pos.step(direction);
            while let Some(current) = next {
                match self.board.cell(current) {
                    Some(piece) if piece.is_placed_of(player.opposite()) => {
                        self.board.flip_at(current);
                        self.change_score(player, 1);
                        self.change_score(player.opposite(), -1);
                        flipped.push(current);
                        next = current.step(direction);
                    }
                    _ => break,
                }
            }
        }

        self.board.promote_at(pos);
        self.change_score(player, 1);

        debug!(%pos, flipped = flipped.len(), "Move applied");
        Move::new(player, pos, flipped)
    }

    /// Clears leftover suggestions, hands the turn over, and suggests again.
    fn advance(&mut self, next_turn: u32) {
        self.board.clear_suggestions();
        self.current_player = self.current_player.opposite();
        self.turn_number = next_turn;
        self.refresh_suggestions();
    }

    fn change_score(&mut self, player: Color, delta: i32) {
        let score = match player {
            Color::Black => &mut self.player1_score,
            Color::White => &mut self.player2_score,
        };
        *score = score.saturating_add_signed(delta);
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Number of turns played so far.
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Black's score.
    pub fn player1_score(&self) -> u32 {
        self.player1_score
    }

    /// White's score.
    pub fn player2_score(&self) -> u32 {
        self.player2_score
    }

    /// Score of `color`.
    pub fn score(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.player1_score,
            Color::White => self.player2_score,
        }
    }

    /// Color to move.
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Cells where the current player may move, in raster order.
    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.suggestions(self.current_player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
