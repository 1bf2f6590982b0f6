//! Othello rules as pure functions over a board.
//!
//! Nothing here mutates the board; `GameState` decides what to do with
//! the answers.

pub mod legality;
pub mod lines;

pub use legality::{is_chosen_move_valid, is_legal_move, legal_moves};
pub use lines::{adjacent_opponents, capture_lines, is_valid_line, lines_from_adjacency};
