//! Application configuration
//!
//! Loaded from a TOML file:
//!
//! ```toml
//! [paths]
//! input = "data/working/sample_50.jsonl"
//! output = "data/annotated/train.jsonl"
//! progress = "data/annotated/.progress.json"
//!
//! [session]
//! wrap_width = 80
//!
//! [style_hints]
//! "Outdated" = "Prefer the newest source."
//! ```
//!
//! Every key is optional.

use cea_record::StyleGuide;
use cea_session::SessionConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default example source
pub const DEFAULT_INPUT: &str = "data/working/sample_50.jsonl";
/// Default annotation log
pub const DEFAULT_OUTPUT: &str = "data/annotated/train.jsonl";
/// Default progress state
pub const DEFAULT_PROGRESS: &str = "data/annotated/.progress.json";

/// Errors loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// File locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub progress: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            progress: PathBuf::from(DEFAULT_PROGRESS),
        }
    }
}

/// Top-level configuration for the `cea` binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub session: SessionConfig,
    /// Per-label overrides layered over the session's style guide
    pub style_hints: StyleGuide,
}

impl AppConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// With example source path
    #[inline]
    #[must_use]
    pub fn with_input(mut self, input: impl Into<PathBuf>) -> Self {
        self.paths.input = input.into();
        self
    }

    /// With annotation log path
    #[inline]
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.paths.output = output.into();
        self
    }

    /// With progress state path
    #[inline]
    #[must_use]
    pub fn with_progress(mut self, progress: impl Into<PathBuf>) -> Self {
        self.paths.progress = progress.into();
        self
    }

    /// Session configuration with the style hint overrides applied
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        let guide = self
            .session
            .style_guide
            .clone()
            .merged(self.style_hints.clone());
        self.session.clone().with_style_guide(guide)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            session: SessionConfig::default(),
            style_hints: StyleGuide::empty(),
        }
    }
}
