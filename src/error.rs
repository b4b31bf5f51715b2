use std::path::PathBuf;

/// Errors from parsing the text board format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 rows, found {found}")]
    RowCount { found: usize },

    #[error("row {row} has {found} cells, expected 7")]
    RowWidth { row: usize, found: usize },

    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    Glyph { row: usize, col: usize, glyph: char },

    #[error("disc at row {row}, column {col} has an empty cell below it")]
    Floating { row: usize, col: usize },
}

/// Errors that can occur while two agents play each other.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("agent {agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("agent {agent} found no move in an unfinished game")]
    NoMove { agent: String },
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
