//! File-backed persistence for one game session.
//!
//! Each command reloads the snapshot, applies at most one move and writes it
//! back. The store takes no locks; callers sharing a save file must run one
//! request to completion before starting the next.

use derive_more::{Display, Error};
use std::path::{Path, PathBuf};
use strictly_othello::{GameState, Move, OthelloError, save};
use tracing::{debug, info, instrument, warn};

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<OthelloError> for StoreError {
    #[track_caller]
    fn from(err: OthelloError) -> Self {
        Self::new(format!("Game error: {}", err))
    }
}

/// What happened to a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and saved.
    Applied {
        /// The applied move.
        applied: Move,
        /// The game after the move.
        game: GameState,
    },
    /// The request was for an older turn; nothing changed.
    Stale {
        /// Turn number the request was made for.
        requested: u32,
        /// Turn number of the saved game.
        current: u32,
        /// The saved game, unchanged.
        game: GameState,
    },
    /// The engine refused the move; nothing changed.
    Rejected {
        /// Why the move was refused.
        error: OthelloError,
        /// The saved game, unchanged.
        game: GameState,
    },
}

impl MoveOutcome {
    /// The game state to show after the request.
    pub fn game(&self) -> &GameState {
        match self {
            MoveOutcome::Applied { game, .. }
            | MoveOutcome::Stale { game, .. }
            | MoveOutcome::Rejected { game, .. } => game,
        }
    }
}

/// A single save file holding one game.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    /// Creates a store for `path`. Nothing is read until asked.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The save file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if a save file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the saved game.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<GameState, StoreError> {
        let content = std::fs::read_to_string(&self.path)?;
        let game = save::load(&content)?;
        debug!(turn = game.turn_number(), "Loaded saved game");
        Ok(game)
    }

    /// Loads the saved game, or starts a new one when there is no save file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load_or_new(&self) -> Result<GameState, StoreError> {
        if self.exists() {
            self.load()
        } else {
            info!("No save file, starting a new game");
            Ok(GameState::new_game())
        }
    }

    /// Writes `game`, replacing any previous save.
    ///
    /// The snapshot goes to a sibling temporary file first and is then
    /// renamed over the save file.
    #[instrument(skip(self, game), fields(path = %self.path.display(), turn = game.turn_number()))]
    pub fn save(&self, game: &GameState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, save::to_save_string(game))?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("Game saved");
        Ok(())
    }

    /// Replaces the save with a fresh game.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn new_game(&self) -> Result<GameState, StoreError> {
        let game = GameState::new_game();
        self.save(&game)?;
        info!("New game saved");
        Ok(game)
    }

    /// Reads the saved turn number without loading the board.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn turn_number(&self) -> Result<u32, StoreError> {
        let content = std::fs::read_to_string(&self.path)?;
        Ok(save::peek_turn_number(&content)?)
    }

    /// Applies one move requested for `turn_number`.
    ///
    /// A request made against an older snapshot is answered with
    /// [`MoveOutcome::Stale`] and a move the engine refuses with
    /// [`MoveOutcome::Rejected`]; neither touches the file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn apply_move(
        &self,
        row: usize,
        col: usize,
        turn_number: u32,
    ) -> Result<MoveOutcome, StoreError> {
        let mut game = self.load_or_new()?;

        if game.turn_number() != turn_number {
            warn!(
                requested = turn_number,
                current = game.turn_number(),
                "Stale move request"
            );
            return Ok(MoveOutcome::Stale {
                requested: turn_number,
                current: game.turn_number(),
                game,
            });
        }

        match game.play_turn(row, col) {
            Ok(applied) => {
                self.save(&game)?;
                info!(%applied, "Move saved");
                Ok(MoveOutcome::Applied { applied, game })
            }
            Err(error) => {
                warn!(%error, "Move rejected");
                Ok(MoveOutcome::Rejected { error, game })
            }
        }
    }
}
