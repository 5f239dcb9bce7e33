//! Errors raised by flat-file record storage.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Failures while opening, reading, or writing a record file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The data directory could not be created or opened.
    #[error("failed to open data directory {path}")]
    OpenDirectory {
        /// Directory that was requested.
        path: Utf8PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// A record file could not be read.
    #[error("failed to read record file {file}")]
    Read {
        /// Record file name relative to the data directory.
        file: String,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// A record file could not be written.
    #[error("failed to write record file {file}")]
    Write {
        /// Record file name relative to the data directory.
        file: String,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    pub(crate) fn read(file: &str, source: std::io::Error) -> Self {
        Self::Read {
            file: file.to_owned(),
            source,
        }
    }

    pub(crate) fn write(file: &str, source: std::io::Error) -> Self {
        Self::Write {
            file: file.to_owned(),
            source,
        }
    }
}
