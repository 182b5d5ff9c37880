//! Optional TOML configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "hotseat.toml";

/// User settings for a hotseat session.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HotseatConfig {
    /// Name used for the X player when none is entered.
    #[serde(default = "default_player1")]
    default_player1: String,

    /// Name used for the O player when none is entered.
    #[serde(default = "default_player2")]
    default_player2: String,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player1() -> String {
    "Player 1".to_string()
}

fn default_player2() -> String {
    "Player 2".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("hotseat.log")
}

impl Default for HotseatConfig {
    fn default() -> Self {
        Self {
            default_player1: default_player1(),
            default_player2: default_player2(),
            log_file: default_log_file(),
        }
    }
}

impl HotseatConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player1 = %config.default_player1,
            player2 = %config.default_player2,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given; otherwise [`DEFAULT_CONFIG_PATH`] if it exists,
    /// falling back to built-in defaults.
    ///
    /// An explicitly named file that is missing is an error.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces the default names with non-blank overrides, trimmed.
    pub fn with_names(mut self, player1: Option<String>, player2: Option<String>) -> Self {
        if let Some(name) = override_name(player1) {
            self.default_player1 = name;
        }
        if let Some(name) = override_name(player2) {
            self.default_player2 = name;
        }
        self
    }
}

fn override_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
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
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
