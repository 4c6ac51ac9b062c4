use std::path::PathBuf;

/// Errors raised while placing a piece on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("column {column} is out of range (valid: 0..{cols})")]
    OutOfRange { column: isize, cols: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Errors raised by a game session when a move is submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error("the game is already over")]
    GameAlreadyOver,
}

impl SessionError {
    /// Whether the same player may simply try another column.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SessionError::Placement(_))
    }
}

/// Errors that can occur when building a game or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "win length must be between {} and {} (got {win_length})",
        crate::game::MIN_WIN_LENGTH,
        crate::game::MAX_WIN_LENGTH
    )]
    InvalidWinLength { win_length: usize },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
