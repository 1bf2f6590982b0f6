//! The 8x8 Othello board.

use crate::error::OthelloError;
use crate::types::{BOARD_SIZE, Color, Piece, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// Raw grid of cells, row-major.
pub type Cells = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

/// An 8x8 grid of optional pieces.
///
/// A cell is empty, a suggestion of some color, or a placed piece of some
/// color. Every `(row, col)` accessor goes through [`Position::new`] and so
/// fails with [`OthelloError::OutOfRange`] off the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Creates a board holding the standard four-piece opening.
    #[instrument]
    pub fn new() -> Self {
        let mut cells: Cells = [[None; BOARD_SIZE]; BOARD_SIZE];
        cells[3][3] = Some(Piece::placed(Color::White));
        cells[3][4] = Some(Piece::placed(Color::Black));
        cells[4][3] = Some(Piece::placed(Color::Black));
        cells[4][4] = Some(Piece::placed(Color::White));
        Self { cells }
    }

    /// Creates a board with no pieces at all.
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Removes every piece and suggestion.
    #[instrument(skip(self))]
    pub fn clear_all(&mut self) {
        self.cells = [[None; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Removes suggestions, leaving placed pieces untouched.
    #[instrument(skip(self))]
    pub fn clear_suggestions(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_some_and(|piece| piece.is_suggestion()) {
                *cell = None;
            }
        }
    }

    /// Toggles the color of whatever occupies the cell; empty cells are left alone.
    #[instrument(skip(self))]
    pub fn flip(&mut self, row: usize, col: usize) -> Result<(), OthelloError> {
        let pos = Position::new(row, col)?;
        self.flip_at(pos);
        Ok(())
    }

    /// Turns a suggestion into a placed piece; empty or placed cells are left alone.
    #[instrument(skip(self))]
    pub fn promote(&mut self, row: usize, col: usize) -> Result<(), OthelloError> {
        let pos = Position::new(row, col)?;
        self.promote_at(pos);
        Ok(())
    }

    /// Writes `piece` into the cell.
    ///
    /// # Errors
    ///
    /// [`OthelloError::OccupiedCell`] if a placed piece is already there.
    /// Suggestions and empty cells may always be overwritten.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), OthelloError> {
        let pos = Position::new(row, col)?;
        self.place_at(pos, piece)
    }

    /// Returns a copy of the cell contents.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<Piece>, OthelloError> {
        Position::new(row, col).map(|pos| self.cell(pos))
    }

    /// True when `(row, col)` lies on the board. Accepts negative coordinates.
    pub fn in_bounds(row: isize, col: isize) -> bool {
        let size = BOARD_SIZE as isize;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// Number of suggestion pieces of `color`.
    pub fn count_suggestions(&self, color: Color) -> usize {
        self.pieces()
            .filter(|piece| piece.is_suggestion() && piece.color() == color)
            .count()
    }

    /// Number of placed pieces of `color`.
    pub fn count_placed(&self, color: Color) -> usize {
        self.pieces().filter(|piece| piece.is_placed_of(color)).count()
    }

    /// Number of placed pieces of either color.
    pub fn placed_total(&self) -> usize {
        self.pieces().filter(Piece::is_placed).count()
    }

    /// Positions holding a suggestion of `color`, in raster order.
    pub fn suggestions(&self, color: Color) -> Vec<Position> {
        Position::all()
            .filter(|pos| {
                self.cell(*pos)
                    .is_some_and(|piece| piece.is_suggestion() && piece.color() == color)
            })
            .collect()
    }

    /// An independent copy of the whole grid.
    pub fn cells(&self) -> Cells {
        self.cells
    }

    /// Cell contents at an already validated position.
    pub fn cell(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.row()][pos.col()]
    }

    pub(crate) fn flip_at(&mut self, pos: Position) {
        if let Some(piece) = self.cells[pos.row()][pos.col()].as_mut() {
            piece.flip();
        }
    }

    pub(crate) fn promote_at(&mut self, pos: Position) {
        if let Some(piece) = self.cells[pos.row()][pos.col()].as_mut() {
            piece.promote();
        }
    }

    pub(crate) fn place_at(&mut self, pos: Position, piece: Piece) -> Result<(), OthelloError> {
        let cell = &mut self.cells[pos.row()][pos.col()];
        if cell.is_some_and(|existing| existing.is_placed()) {
            debug!(%pos, "Refusing to overwrite placed piece");
            return Err(OthelloError::OccupiedCell {
                row: pos.row(),
                col: pos.col(),
            });
        }
        *cell = Some(piece);
        Ok(())
    }

    fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
