//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Display and runtime settings for a game session.
///
/// Player labels are always non-empty and distinct, whichever way the
/// configuration was built.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile")]
pub struct GameConfig {
    /// Label shown for player X.
    x_label: String,

    /// Label shown for player O.
    o_label: String,

    /// Re-check history invariants after every recorded move.
    check_invariants: bool,

    /// File the terminal UI writes its logs to.
    log_file: PathBuf,
}

/// Unvalidated on-disk form of [`GameConfig`]; missing keys take defaults.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default = "default_x_label")]
    x_label: String,

    #[serde(default = "default_o_label")]
    o_label: String,

    #[serde(default = "default_check_invariants")]
    check_invariants: bool,

    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

impl TryFrom<ConfigFile> for GameConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let config = Self {
            x_label: file.x_label,
            o_label: file.o_label,
            check_invariants: file.check_invariants,
            log_file: file.log_file,
        };
        config.validate()?;
        Ok(config)
    }
}

#[instrument]
fn default_x_label() -> String {
    "X".to_string()
}

#[instrument]
fn default_o_label() -> String {
    "O".to_string()
}

#[instrument]
fn default_check_invariants() -> bool {
    true
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_rewind_tui.log")
}

impl GameConfig {
    /// Creates a configuration with custom player labels.
    ///
    /// # Errors
    ///
    /// Fails if either label is blank or both labels are equal.
    #[instrument(skip(x_label, o_label))]
    pub fn new(
        x_label: impl Into<String>,
        o_label: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            x_label: x_label.into(),
            o_label: o_label.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks that player labels are non-empty and distinct.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x_label.trim().is_empty() || self.o_label.trim().is_empty() {
            return Err(ConfigError::new(
                "Player labels must not be empty".to_string(),
            ));
        }
        if self.x_label == self.o_label {
            return Err(ConfigError::new(format!(
                "Player labels must differ, both are {:?}",
                self.x_label
            )));
        }
        Ok(())
    }

    /// Turns per-move invariant checking on or off.
    pub fn with_check_invariants(mut self, check: bool) -> Self {
        self.check_invariants = check;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(x_label = %config.x_label, o_label = %config.o_label, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Self::try_from(file)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            x_label: default_x_label(),
            o_label: default_o_label(),
            check_invariants: default_check_invariants(),
            log_file: default_log_file(),
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
