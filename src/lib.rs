//! Othello Online - frontends for the strictly_othello rules engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for the save file and player names
//! - **Store**: one game session persisted in the flat save format
//! - **Console**: interactive two-player game over stdin/stdout
//! - **Render**: plain-text board, score and result views
//!
//! # Example
//!
//! ```no_run
//! use othello_online::{OthelloConfig, SaveStore};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = OthelloConfig::load_or_default("othello.toml")?;
//! let store = SaveStore::new(config.save_path());
//! let game = store.load_or_new()?;
//! println!("{}", othello_online::render::summary(&game, &config));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
pub mod render;
mod store;

// Crate-level exports - Configuration
pub use config::{ConfigError, OthelloConfig};

// Crate-level exports - Console game
pub use console::{ConsoleError, ConsoleGame};

// Crate-level exports - Persistence
pub use store::{MoveOutcome, SaveStore, StoreError};

// Crate-level exports - Engine types
pub use strictly_othello::{Color, GameState, GameStatus, Move, OthelloError, Outcome};
