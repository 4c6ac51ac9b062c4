use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{MAX_WIN_LENGTH, MIN_WIN_LENGTH};

/// Settings for a single game: who plays, and how long a winning run is.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub win_length: usize,
    pub player_one: String,
    pub player_two: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            win_length: 4,
            player_one: "Player 1".to_string(),
            player_two: "Player 2".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_WIN_LENGTH..=MAX_WIN_LENGTH).contains(&self.game.win_length) {
            return Err(ConfigError::InvalidWinLength {
                win_length: self.game.win_length,
            });
        }
        if self.game.player_one.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.player_one must not be blank".into(),
            ));
        }
        if self.game.player_two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game.player_two must not be blank".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
