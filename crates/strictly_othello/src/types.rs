//! Core domain types for Othello.

use crate::error::OthelloError;
use serde::Serialize;
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Color of a piece, and of the player who owns it.
///
/// Black is player 1 and always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Color {
    /// Player 1.
    Black,
    /// Player 2.
    White,
}

impl Color {
    /// Returns the other color.
    pub fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A piece on the board: either placed, or a suggestion marking a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    color: Color,
    placed: bool,
}

impl Piece {
    /// Creates a placed piece.
    pub fn placed(color: Color) -> Self {
        Self {
            color,
            placed: true,
        }
    }

    /// Creates a suggestion (unplaced) piece.
    pub fn suggestion(color: Color) -> Self {
        Self {
            color,
            placed: false,
        }
    }

    /// Returns the piece color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// True for a placed piece, false for a suggestion.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// True for a suggestion.
    pub fn is_suggestion(&self) -> bool {
        !self.placed
    }

    /// True when this is a placed piece of `color`.
    pub fn is_placed_of(&self, color: Color) -> bool {
        self.placed && self.color == color
    }

    /// Toggles the color (black <-> white).
    pub fn flip(&mut self) {
        self.color = self.color.opposite();
    }

    /// Turns a suggestion into a placed piece.
    pub fn promote(&mut self) {
        self.placed = true;
    }
}

/// A cell coordinate that is known to be on the board.
///
/// `Position::new` is the only place coordinates are bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, failing when either coordinate is off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, OthelloError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(OthelloError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    /// Row index (0-7).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (0-7).
    pub fn col(&self) -> usize {
        self.col
    }

    /// Moves one step in `direction`, or `None` when that leaves the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let row = self.row.checked_add_signed(direction.dr() as isize)?;
        let col = self.col.checked_add_signed(direction.dc() as isize)?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Every board position in raster order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions, as a row/column delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Direction {
    dr: i8,
    dc: i8,
}

impl Direction {
    /// All eight directions in raster order over the 3x3 offset grid.
    pub const ALL: [Direction; 8] = [
        Direction { dr: -1, dc: -1 },
        Direction { dr: -1, dc: 0 },
        Direction { dr: -1, dc: 1 },
        Direction { dr: 0, dc: -1 },
        Direction { dr: 0, dc: 1 },
        Direction { dr: 1, dc: -1 },
        Direction { dr: 1, dc: 0 },
        Direction { dr: 1, dc: 1 },
    ];

    /// Creates a direction. Both deltas must be in `-1..=1` and not both zero.
    pub fn new(dr: i8, dc: i8) -> Result<Self, OthelloError> {
        let unit = |d: i8| (-1..=1).contains(&d);
        if !unit(dr) || !unit(dc) || (dr == 0 && dc == 0) {
            return Err(OthelloError::InvalidDirection { dr, dc });
        }
        Ok(Self { dr, dc })
    }

    /// Row delta.
    pub fn dr(&self) -> i8 {
        self.dr
    }

    /// Column delta.
    pub fn dc(&self) -> i8 {
        self.dc
    }

    /// Index into a 3x3 mask, `(dr + 1, dc + 1)`.
    pub(crate) fn mask_index(&self) -> (usize, usize) {
        ((self.dr + 1) as usize, (self.dc + 1) as usize)
    }
}

/// A 3x3 boolean mask keyed by direction; the center cell is never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DirectionMask {
    cells: [[bool; 3]; 3],
}

impl DirectionMask {
    /// Creates a mask with every direction cleared.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the flag for `direction`.
    pub fn get(&self, direction: Direction) -> bool {
        let (r, c) = direction.mask_index();
        self.cells[r][c]
    }

    /// Sets the flag for `direction`.
    pub fn set(&mut self, direction: Direction, value: bool) {
        let (r, c) = direction.mask_index();
        self.cells[r][c] = value;
    }

    /// True if any direction is flagged.
    pub fn any(&self) -> bool {
        Direction::ALL.iter().any(|d| self.get(*d))
    }

    /// Flagged directions in raster order.
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.get(*d))
    }

    /// The raw 3x3 grid; index `(1, 1)` is the unused center.
    pub fn as_grid(&self) -> [[bool; 3]; 3] {
        self.cells
    }
}
