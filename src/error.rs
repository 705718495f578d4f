use std::path::PathBuf;

/// Errors raised by the game engine.
///
/// A full column and a drop after the game has ended are ordinary game
/// conditions and never show up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid column {column} (expected 0..{columns})")]
    InvalidColumn { column: i64, columns: usize },

    #[error("cell ({column}, {row}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        column: usize,
        row: usize,
        columns: usize,
        rows: usize,
    },
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

/// Errors that end a headless session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_column_display() {
        let err = GameError::InvalidColumn {
            column: -1,
            columns: 7,
        };
        assert_eq!(err.to_string(), "invalid column -1 (expected 0..7)");
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = GameError::OutOfBounds {
            column: 7,
            row: 2,
            columns: 7,
            rows: 6,
        };
        assert_eq!(err.to_string(), "cell (7, 2) is outside the 7x6 grid");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.rows must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.rows must be >= 1"
        );
    }

    #[test]
    fn test_session_error_wraps_io_error() {
        let err = SessionError::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "stdout closed",
        ));
        assert_eq!(err.to_string(), "I/O error: stdout closed");
    }
}
