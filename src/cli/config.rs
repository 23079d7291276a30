//! Shared configuration for CLI commands
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional JSON file given with `--config`, and command-line flags.

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::{Error, Result, tictactoe::Mark};

/// How command results are written to stdout
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable boards and tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Side of the board, as written on the command line
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// X, moves first
    #[default]
    X,
    /// O, moves second
    O,
}

impl Side {
    pub fn mark(self) -> Mark {
        match self {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

/// Configuration shared across commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,

    /// Output format for command results
    pub format: OutputFormat,

    /// Which side the human takes in `play`
    pub human: Side,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: OutputFormat::Text,
            human: Side::X,
        }
    }
}

impl CliConfig {
    /// Load a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read,
    /// [`Error::Serialization`] if it is not valid JSON for this structure, and
    /// [`Error::InvalidConfiguration`] if the log level is not a valid filter.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config file '{}'", path.display()),
            source,
        })?;
        let config: CliConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    ///
    /// # Errors
    ///
    /// See [`CliConfig::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded values.
    ///
    /// `verbose` raises the log level to `debug` unless a level was given
    /// explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the resulting log level is
    /// not a valid filter.
    pub fn with_overrides(
        mut self,
        log_level: Option<String>,
        format: Option<OutputFormat>,
        human: Option<Side>,
        verbose: bool,
    ) -> Result<Self> {
        if let Some(level) = log_level {
            self.log_level = level;
        } else if verbose {
            self.log_level = "debug".to_string();
        }
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(human) = human {
            self.human = human;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        EnvFilter::try_new(&self.log_level).map_err(|e| Error::InvalidConfiguration {
            message: format!("log level '{}': {e}", self.log_level),
        })?;
        Ok(())
    }
}
