use std::path::PathBuf;

/// Errors raised by board operations and move selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal move: the board is full")]
    NoLegalMove,

    #[error("column {col} is out of range (expected 0..7)")]
    InvalidColumn { col: usize },

    #[error("row {row} is out of range (expected 0..6)")]
    InvalidRow { row: usize },

    #[error("column {col} is full")]
    ColumnFull { col: usize },

    #[error("row {row} is not the next open row of column {col} (expected {expected})")]
    RowNotOpen {
        row: usize,
        col: usize,
        expected: usize,
    },

    #[error("cannot drop an empty piece")]
    EmptyPiece,

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
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
