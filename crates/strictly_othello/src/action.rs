//! First-class record of an applied turn.

use crate::types::{Color, Position};
use derive_new::new;
use serde::Serialize;

/// A move that has been applied: who played where, and what it captured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct Move {
    player: Color,
    position: Position,
    flipped: Vec<Position>,
}

impl Move {
    /// The color that moved.
    pub fn player(&self) -> Color {
        self.player
    }

    /// The cell the piece was placed on.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Opponent pieces that changed color, grouped by direction in raster order.
    pub fn flipped(&self) -> &[Position] {
        &self.flipped
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} ({} flipped)",
            self.player,
            self.position,
            self.flipped.len()
        )
    }
}
