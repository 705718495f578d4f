use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;

/// Reference grid width.
pub const DEFAULT_COLUMNS: usize = 7;
/// Reference grid height.
pub const DEFAULT_ROWS: usize = 6;
/// Discs in a row needed to win.
pub const DEFAULT_WIN_LENGTH: usize = 4;

/// Largest grid side accepted from configuration.
pub const MAX_DIMENSION: usize = 64;

/// Grid dimensions and winning run length handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    pub win_length: usize,
}

impl GameConfig {
    pub fn new(columns: usize, rows: usize, win_length: usize) -> Self {
        GameConfig {
            columns,
            rows,
            win_length,
        }
    }

    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::Validation("game.columns must be >= 1".into()));
        }
        if self.rows == 0 {
            return Err(ConfigError::Validation("game.rows must be >= 1".into()));
        }
        if self.columns > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.columns must be <= {MAX_DIMENSION}"
            )));
        }
        if self.rows > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "game.rows must be <= {MAX_DIMENSION}"
            )));
        }
        if self.win_length < 2 {
            return Err(ConfigError::Validation(
                "game.win_length must be >= 2".into(),
            ));
        }
        if self.win_length > self.columns.max(self.rows) {
            return Err(ConfigError::Validation(
                "game.win_length must fit on the grid (<= max(columns, rows))".into(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig::new(DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_LENGTH)
    }
}

/// Terminal UI presentation settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub show_column_numbers: bool,
    pub highlight_winning_line: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_column_numbers: true,
            highlight_winning_line: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub ui: UiConfig,
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

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
