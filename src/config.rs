//! Storage configuration.
//!
//! The configuration only names where the record files live. It can be
//! loaded from a TOML file; every field has a default.
//!
//! ```toml
//! data_dir = "data"
//! users_file = "users.csv"
//! tasks_file = "tasks.csv"
//! logs_file = "logs.csv"
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}")]
    Read {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`StorageConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Location of the record files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding the record files.
    pub data_dir: Utf8PathBuf,
    /// Users file name, relative to `data_dir`.
    pub users_file: String,
    /// Tasks file name, relative to `data_dir`.
    pub tasks_file: String,
    /// Change-history file name, relative to `data_dir`.
    pub logs_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: Utf8PathBuf::from("data"),
            users_file: "users.csv".to_owned(),
            tasks_file: "tasks.csv".to_owned(),
            logs_file: "logs.csv".to_owned(),
        }
    }
}

impl StorageConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid TOML or
    /// names unknown fields.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or
    /// [`ConfigError::Parse`] when its content is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let read_err = |source| ConfigError::Read {
            path: path.to_owned(),
            source,
        };
        let file_name = path.file_name().ok_or_else(|| {
            read_err(std::io::Error::other("configuration path must name a file"))
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_err)?;
        let text = dir.read_to_string(file_name).map_err(read_err)?;
        tracing::debug!(%path, "loaded configuration");
        Self::from_toml_str(&text)
    }

    /// Returns the configuration with a different data directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<Utf8PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
