//! Strictly Othello - rules engine for Othello (Reversi).
//!
//! The engine is pure and synchronous: it reads a full game state in and
//! produces a full game state out. Presentation layers drive it through
//! [`GameState`] and persist it through the [`save`] text format.
//!
//! # Example
//!
//! ```
//! use strictly_othello::{Color, GameState, save};
//!
//! let mut game = GameState::new_game();
//! game.play_turn(2, 3).unwrap();
//! assert_eq!(game.current_player(), Color::White);
//!
//! let text = save::to_save_string(&game);
//! assert_eq!(save::load(&text).unwrap(), game);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod game;
pub mod invariants;
mod phases;
pub mod rules;
pub mod save;
mod types;

pub use action::Move;
pub use board::{Board, Cells};
pub use error::OthelloError;
pub use game::GameState;
pub use phases::{GameStatus, Outcome};
pub use types::{BOARD_SIZE, Color, Direction, DirectionMask, Piece, Position};
