//! Interactive console game.
//!
//! Reads whitespace-separated tokens from any `BufRead` and writes prompts
//! and boards to any `Write`, so tests can drive it with in-memory buffers.

use crate::config::OthelloConfig;
use crate::render;
use crate::store::{SaveStore, StoreError};
use derive_more::{Display, Error, From};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use strictly_othello::{BOARD_SIZE, GameState, OthelloError};
use tracing::{debug, info, instrument, warn};

/// Errors that end a console game early.
#[derive(Debug, Display, Error, From)]
pub enum ConsoleError {
    /// Input ran out before the game finished.
    #[display("Input ended before the game finished")]
    #[from(skip)]
    InputClosed,

    /// Reading input or writing output failed.
    #[display("Console I/O failed: {_0}")]
    Io(std::io::Error),

    /// Saving the game between turns failed.
    #[display("{_0}")]
    Store(StoreError),
}

/// A two-player game played over a text console.
pub struct ConsoleGame<'a, R, W> {
    config: &'a OthelloConfig,
    input: R,
    output: W,
    tokens: VecDeque<String>,
    store: Option<&'a SaveStore>,
}

impl<'a, R: BufRead, W: Write> ConsoleGame<'a, R, W> {
    /// Creates a console game reading from `input` and writing to `output`.
    pub fn new(config: &'a OthelloConfig, input: R, output: W) -> Self {
        Self {
            config,
            input,
            output,
            tokens: VecDeque::new(),
            store: None,
        }
    }

    /// Saves the game to `store` after every turn.
    pub fn with_store(mut self, store: &'a SaveStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Plays `game` until it finishes and returns the final state.
    #[instrument(skip_all, fields(turn = game.turn_number()))]
    pub fn run(mut self, mut game: GameState) -> Result<GameState, ConsoleError> {
        info!("Console game started");
        game.refresh_suggestions();

        while !game.is_finished() {
            writeln!(self.output, "{}", render::scores(&game))?;
            writeln!(
                self.output,
                "{}",
                render::board(&game, *self.config.show_suggestions())
            )?;
            writeln!(self.output)?;

            self.take_turn(&mut game)?;

            if let Some(store) = self.store {
                store.save(&game)?;
            }
        }

        self.finish_screen(&game)?;
        info!(outcome = ?game.outcome(), "Console game finished");
        Ok(game)
    }

    /// Prompts until the current player makes an accepted move.
    fn take_turn(&mut self, game: &mut GameState) -> Result<(), ConsoleError> {
        let name = self.config.player_name(game.current_player()).to_string();
        loop {
            writeln!(self.output, "{}, make your move...", name)?;
            let row = self.read_coordinate("Pick a row: ", "Row out of bounds.")?;
            let col = self.read_coordinate("Pick a column: ", "Column out of bounds.")?;

            match game.play_turn(row, col) {
                Ok(applied) => {
                    debug!(%applied, "Console move accepted");
                    return Ok(());
                }
                Err(OthelloError::InvalidMove { .. }) => {
                    writeln!(
                        self.output,
                        "Invalid move. Pick a cell with a suggested cell."
                    )?;
                }
                Err(error) => {
                    warn!(%error, "Console move refused");
                    writeln!(self.output, "{}", error)?;
                }
            }
        }
    }

    fn finish_screen(&mut self, game: &GameState) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", render::board(game, false))?;
        writeln!(self.output, "{}", render::scores(game))?;
        if let Some(outcome) = game.outcome() {
            writeln!(self.output, "{}", render::winner(outcome, self.config))?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Reads one coordinate, re-prompting until it is an integer on the board.
    fn read_coordinate(
        &mut self,
        prompt: &str,
        out_of_bounds: &str,
    ) -> Result<usize, ConsoleError> {
        write!(self.output, "{}", prompt)?;
        loop {
            let value = self.read_integer()?;
            match usize::try_from(value) {
                Ok(index) if index < BOARD_SIZE => return Ok(index),
                _ => {
                    writeln!(self.output, "{}", out_of_bounds)?;
                    write!(self.output, "{}", prompt)?;
                }
            }
        }
    }

    /// Skips tokens until one parses as an integer.
    fn read_integer(&mut self) -> Result<i64, ConsoleError> {
        self.output.flush()?;
        loop {
            let token = self.next_token()?;
            match token.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    write!(self.output, "Invalid input. Provide an integer value: ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<String, ConsoleError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::InputClosed);
            }
            self.tokens.extend(line.split_whitespace().map(str::to_string));
        }
        self.tokens.pop_front().ok_or(ConsoleError::InputClosed)
    }
}
