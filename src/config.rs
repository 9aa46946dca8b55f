//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `DIRLAYOUT_*` prefix
//! 3. Command-line flags (applied by the CLI layer)

use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "DIRLAYOUT";

/// Unified configuration for dirlayout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base directory the layout is created under (default: current directory)
    pub output_dir: PathBuf,
    /// Print the expanded tree instead of creating it
    pub preview: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            preview: false,
        }
    }
}

impl Settings {
    /// Load settings: defaults, then `DIRLAYOUT_*` environment overrides.
    pub fn load() -> Result<Self, ApplicationError> {
        let mut settings = Self::apply_env_overrides(Self::default())?;
        settings.expand_paths();
        Ok(settings)
    }

    /// Apply DIRLAYOUT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("output_dir") {
            settings.output_dir = PathBuf::from(val);
        }
        match config.get_bool("preview") {
            Ok(val) => settings.preview = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Override with values given on the command line.
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>, preview: bool) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
            self.expand_paths();
        }
        self.preview |= preview;
        self
    }

    /// Expand `~`, `$VAR` and `${VAR}` in the output directory.
    /// Unknown variables leave the path untouched.
    fn expand_paths(&mut self) {
        let raw = self.output_dir.to_string_lossy().into_owned();
        if let Ok(expanded) = shellexpand::full(&raw) {
            self.output_dir = PathBuf::from(expanded.as_ref());
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
