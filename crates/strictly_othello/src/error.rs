//! Errors raised by the Othello engine.

use derive_more::{Display, Error};

/// Every failure the engine can report.
///
/// None of these are transient; an operation that fails leaves the game
/// untouched and the caller decides whether to re-prompt.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum OthelloError {
    /// Coordinate outside the 8x8 grid.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Attempt to overwrite a placed piece directly.
    #[display("Cell ({row}, {col}) already holds a piece; flip it instead")]
    OccupiedCell {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
    },

    /// The chosen cell is not a suggestion for the player to move.
    #[display("Invalid move at ({row}, {col}): pick a cell with a suggested piece")]
    InvalidMove {
        /// Chosen row.
        row: usize,
        /// Chosen column.
        col: usize,
    },

    /// The game is finished and accepts no more moves.
    #[display("Game is already over")]
    GameOver,

    /// The turn counter is at its maximum and cannot advance.
    #[display("Turn {turn} is the last turn the counter can hold")]
    TurnLimit {
        /// Turn number the move was attempted on.
        turn: u32,
    },

    /// Direction deltas outside `-1..=1`, or the zero direction.
    #[display("Invalid direction ({dr}, {dc})")]
    InvalidDirection {
        /// Row delta.
        dr: i8,
        /// Column delta.
        dc: i8,
    },

    /// Save data is missing a key or holds an unparsable value.
    #[display("Malformed save data: {reason}")]
    MalformedSave {
        /// What was wrong with the data.
        reason: String,
    },
}

impl OthelloError {
    /// Builds a [`OthelloError::MalformedSave`].
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedSave {
            reason: reason.into(),
        }
    }
}
