//! Frontend configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the console game and the save-file frontend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct OthelloConfig {
    /// Where the single game session is saved.
    #[serde(default = "default_save_path")]
    save_path: PathBuf,

    /// Display name for black.
    #[serde(default = "default_player1_name")]
    player1_name: String,

    /// Display name for white.
    #[serde(default = "default_player2_name")]
    player2_name: String,

    /// Whether rendered boards show suggestion markers.
    #[serde(default = "default_show_suggestions")]
    show_suggestions: bool,
}

fn default_save_path() -> PathBuf {
    PathBuf::from("othello_saves").join("game1.txt")
}

fn default_player1_name() -> String {
    "Player1".to_string()
}

fn default_player2_name() -> String {
    "Player2".to_string()
}

fn default_show_suggestions() -> bool {
    true
}

impl OthelloConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(save_path = %config.save_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy pointing at a different save file.
    pub fn with_save_path(mut self, save_path: impl Into<PathBuf>) -> Self {
        self.save_path = save_path.into();
        self
    }

    /// Display name for the player of `color`.
    pub fn player_name(&self, color: strictly_othello::Color) -> &str {
        match color {
            strictly_othello::Color::Black => &self.player1_name,
            strictly_othello::Color::White => &self.player2_name,
        }
    }
}

impl Default for OthelloConfig {
    fn default() -> Self {
        Self {
            save_path: default_save_path(),
            player1_name: default_player1_name(),
            player2_name: default_player2_name(),
            show_suggestions: default_show_suggestions(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
