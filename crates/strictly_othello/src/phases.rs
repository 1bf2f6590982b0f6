//! Game phase and outcome types.

use crate::types::Color;
use serde::Serialize;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    /// The color with more placed pieces won.
    Winner(Color),
    /// Both players ended with the same score.
    Draw,
}

impl Outcome {
    /// Decides the outcome from the two scores.
    pub fn from_scores(player1_score: u32, player2_score: u32) -> Self {
        match player1_score.cmp(&player2_score) {
            std::cmp::Ordering::Greater => Outcome::Winner(Color::Black),
            std::cmp::Ordering::Less => Outcome::Winner(Color::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Winner(color) => Some(*color),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(color) => write!(f, "{} wins", color),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// Terminal; no further moves are accepted.
    Finished(Outcome),
}

impl GameStatus {
    /// True for [`GameStatus::Finished`].
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished(_))
    }
}
