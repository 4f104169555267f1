//! Configuration types for Classdraft imports.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every field has a default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`RecognitionConfig`] - Language hint and optional time limit for the recognition engine.
//! - [`ImportConfig`] - Default [`ImportMode`] used when a caller does not choose one.
//!
//! # Example
//!
//! ```
//! # use classdraft::{ImportMode, config::AppConfig};
//! let config = AppConfig::default();
//! assert_eq!(config.recognition().languages(), "eng+spa");
//! assert_eq!(config.recognition().timeout(), None);
//! assert_eq!(config.import().mode(), ImportMode::Merge);
//! ```

use std::time::Duration;

use serde::Deserialize;

use crate::ImportMode;

/// Language hint used when none is configured.
pub const DEFAULT_LANGUAGES: &str = "eng+spa";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Recognition engine section.
    #[serde(default)]
    recognition: RecognitionConfig,

    /// Import section.
    #[serde(default)]
    import: ImportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(recognition: RecognitionConfig, import: ImportConfig) -> Self {
        Self {
            recognition,
            import,
        }
    }

    /// Returns the recognition configuration.
    pub fn recognition(&self) -> &RecognitionConfig {
        &self.recognition
    }

    /// Returns the import configuration.
    pub fn import(&self) -> &ImportConfig {
        &self.import
    }
}

/// Settings handed to the recognition engine.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionConfig {
    /// Engine language hint, e.g. `eng+spa`.
    #[serde(default = "default_languages")]
    languages: String,

    /// Upper bound on a single recognition call, in seconds.
    #[serde(default)]
    timeout_secs: Option<u64>,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            timeout_secs: None,
        }
    }
}

impl RecognitionConfig {
    /// Creates a new [`RecognitionConfig`].
    ///
    /// # Arguments
    ///
    /// * `languages` - Engine language hint.
    /// * `timeout` - Time limit for one recognition call in whole seconds, or `None` for no limit.
    pub fn new(languages: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            languages: languages.into(),
            timeout_secs: timeout.map(|limit| limit.as_secs()),
        }
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }

    /// Returns the time limit for one recognition call, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn default_languages() -> String {
    DEFAULT_LANGUAGES.to_string()
}

/// Import behaviour defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ImportConfig {
    /// How extracted documents are combined with an existing one.
    #[serde(default)]
    mode: ImportMode,
}

impl ImportConfig {
    pub fn new(mode: ImportMode) -> Self {
        Self { mode }
    }

    /// Returns the default [`ImportMode`].
    pub fn mode(&self) -> ImportMode {
        self.mode
    }
}
