//! Application configuration loaded from `crossdrop.toml`.

use crossdrop_puzzle::{PoolOrder, SessionOptions, TileOrientationPolicy};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Initial orientation of word tiles.
    #[serde(default)]
    tile_orientation: TileOrientationPolicy,

    /// Order of the word pool.
    #[serde(default)]
    pool_order: PoolOrder,

    /// Mark word start cells in the grid.
    #[serde(default)]
    show_start_hints: bool,

    /// Log file written while the terminal UI runs.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("crossdrop.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tile_orientation: TileOrientationPolicy::default(),
            pool_order: PoolOrder::default(),
            show_start_hints: false,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            tile_orientation = %config.tile_orientation,
            pool_order = %config.pool_order,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Session options derived from this configuration.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            tile_orientation: self.tile_orientation,
            pool_order: self.pool_order,
            show_start_hints: self.show_start_hints,
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_file(), &PathBuf::from("crossdrop.log"));
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
            tile_orientation = "authored"
            pool_order = "longest_first"
            show_start_hints = true
            log_file = "play.log"
            "#,
        );
        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.tile_orientation(), &TileOrientationPolicy::Authored);
        assert_eq!(config.pool_order(), &PoolOrder::LongestFirst);
        assert!(*config.show_start_hints());
        assert_eq!(config.session_options().pool_order, PoolOrder::LongestFirst);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config("show_start_hints = true\n");
        let config = AppConfig::from_file(file.path()).unwrap();
        assert!(*config.show_start_hints());
        assert_eq!(config.tile_orientation(), &TileOrientationPolicy::Horizontal);
    }

    #[test]
    fn test_unknown_enum_value_is_config_error() {
        let file = write_config("pool_order = \"alphabetical\"\n");
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
