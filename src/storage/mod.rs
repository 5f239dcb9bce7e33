//! Flat-file record storage shared by every store.
//!
//! All file access goes through a capability handle on the data directory;
//! stores never open paths on their own. Each store owns one [`RecordFile`].

mod error;
mod record_file;

pub use error::StorageError;
pub use record_file::{RecordFile, split_fields};

use std::sync::Arc;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Capability handle on the directory holding the record files.
#[derive(Debug, Clone)]
pub struct DataDirectory {
    dir: Arc<Dir>,
}

impl DataDirectory {
    /// Opens `path`, creating it first when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::OpenDirectory`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> Result<Self, StorageError> {
        let open_err = |source| StorageError::OpenDirectory {
            path: path.to_owned(),
            source,
        };
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(open_err)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(open_err)?;
        tracing::debug!(%path, "opened data directory");
        Ok(Self { dir: Arc::new(dir) })
    }

    /// Returns a handle for one record file in this directory.
    #[must_use]
    pub fn record_file(&self, file_name: &str, header: &'static str) -> RecordFile {
        RecordFile::new(Arc::clone(&self.dir), file_name, header)
    }
}
