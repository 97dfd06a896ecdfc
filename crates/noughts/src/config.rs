//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "NOUGHTS_CONFIG";

/// How the terminal front end prints each frame.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Board grid and a status line.
    #[default]
    Text,
    /// One JSON snapshot per line.
    Json,
}

/// Configuration for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Output format for rendered frames.
    #[serde(default)]
    output: OutputFormat,

    /// Glyph drawn for empty cells in text output.
    #[serde(default = "default_empty_glyph")]
    empty_glyph: char,
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_empty_glyph() -> char {
    '.'
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            output: OutputFormat::default(),
            empty_glyph: default_empty_glyph(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        debug!(output = %config.output, "Config parsed");
        Ok(config)
    }

    /// Resolves configuration from an explicit path, then `NOUGHTS_CONFIG`,
    /// then defaults.
    ///
    /// An explicit path must exist. A path from the environment that does
    /// not exist falls back to defaults. Resolution runs before logging is
    /// installed, so the returned [`ConfigSource`] is logged by the caller.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        match std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
            Some(path) if path.exists() => {
                let config = Self::from_file(&path)?;
                Ok((config, ConfigSource::Env(path)))
            }
            Some(path) => Ok((Self::default(), ConfigSource::MissingEnvFile(path))),
            None => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Returns a copy with a different output format.
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

/// Where [`AppConfig::resolve`] found its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigSource {
    /// Path given with `--config`.
    #[display("{}", _0.display())]
    Explicit(PathBuf),
    /// Path named by `NOUGHTS_CONFIG`.
    #[display("${} ({})", CONFIG_ENV, _0.display())]
    Env(PathBuf),
    /// `NOUGHTS_CONFIG` named a file that does not exist.
    #[display("defaults (missing {})", _0.display())]
    MissingEnvFile(PathBuf),
    /// Neither a flag nor the environment named a file.
    #[display("defaults")]
    Defaults,
}

impl ConfigSource {
    /// Logs how the configuration was resolved.
    ///
    /// Call once a subscriber is installed.
    pub fn log(&self) {
        match self {
            ConfigSource::MissingEnvFile(path) => {
                warn!(path = %path.display(), "{} points to a missing file, using defaults", CONFIG_ENV);
            }
            source => info!(%source, "Config loaded"),
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
