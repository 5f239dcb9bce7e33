//! Header-aware access to one comma-separated record file.

use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::sync::Arc;

use cap_std::fs::OpenOptions;
use cap_std::fs_utf8::Dir;

use super::StorageError;

/// One record file inside the data directory.
///
/// The first line of the file is a header and is never returned as data.
/// Rows are handed out verbatim minus their line terminator. Rewrites keep
/// untouched lines, terminators included, byte-for-byte.
///
/// A `RecordFile` performs no locking: one process, one writer.
#[derive(Debug, Clone)]
pub struct RecordFile {
    dir: Arc<Dir>,
    file_name: String,
    header: &'static str,
}

impl RecordFile {
    /// Creates a handle for `file_name` inside `dir`.
    #[must_use]
    pub fn new(dir: Arc<Dir>, file_name: impl Into<String>, header: &'static str) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
            header,
        }
    }

    /// Returns the file name relative to the data directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the header row written when the file is created.
    #[must_use]
    pub const fn header(&self) -> &'static str {
        self.header
    }

    /// Creates the file with its header row unless it already exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the file cannot be created.
    pub fn ensure_exists(&self) -> Result<(), StorageError> {
        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        match self.dir.open_with(&self.file_name, &options) {
            Ok(mut file) => {
                tracing::debug!(file = %self.file_name, "created record file");
                file.write_all(format!("{}\n", self.header).as_bytes())
                    .map_err(|err| StorageError::write(&self.file_name, err))
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(StorageError::write(&self.file_name, err)),
        }
    }

    /// Reads every data row, skipping the header and blank lines.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the file is missing or unreadable.
    pub fn read_rows(&self) -> Result<Vec<String>, StorageError> {
        let contents = self
            .dir
            .read_to_string(&self.file_name)
            .map_err(|err| StorageError::read(&self.file_name, err))?;
        let rows: Vec<String> = contents
            .lines()
            .skip(1)
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect();
        tracing::debug!(file = %self.file_name, rows = rows.len(), "read record file");
        Ok(rows)
    }

    /// Appends one row to the end of the file.
    ///
    /// A missing file is created with its header first. When the existing
    /// content does not end with a newline, one is written before the row so
    /// that rows never merge.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the file cannot be opened or
    /// written.
    pub fn append_row(&self, row: &str) -> Result<(), StorageError> {
        let write_err = |err| StorageError::write(&self.file_name, err);
        let mut options = OpenOptions::new();
        options.read(true).append(true).create(true);
        let mut file = self
            .dir
            .open_with(&self.file_name, &options)
            .map_err(write_err)?;

        let mut buffer = String::new();
        let length = file.metadata().map_err(write_err)?.len();
        if length == 0 {
            buffer.push_str(self.header);
            buffer.push('\n');
        } else {
            file.seek(SeekFrom::End(-1)).map_err(write_err)?;
            let mut last = [0_u8; 1];
            file.read_exact(&mut last).map_err(write_err)?;
            if last != *b"\n" {
                buffer.push('\n');
            }
        }
        buffer.push_str(row);
        buffer.push('\n');

        file.write_all(buffer.as_bytes()).map_err(write_err)?;
        tracing::debug!(file = %self.file_name, "appended record");
        Ok(())
    }

    /// Rewrites the data rows for which `replace` returns a new value.
    ///
    /// Every other line, including the header, blank lines, and each line's
    /// original terminator, is written back byte-for-byte. A replaced row
    /// keeps the terminator of the row it replaces. Nothing is written when
    /// no row is replaced.
    ///
    /// The content is written to a temporary sibling and renamed over the
    /// existing file, so a crash leaves either the old or the new file in
    /// place.
    ///
    /// Returns the number of replaced rows.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the file cannot be read, or
    /// [`StorageError::Write`] when the temporary file cannot be written or
    /// renamed.
    pub fn rewrite_rows<F>(&self, mut replace: F) -> Result<usize, StorageError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let contents = self
            .dir
            .read_to_string(&self.file_name)
            .map_err(|err| StorageError::read(&self.file_name, err))?;

        let mut rewritten = String::with_capacity(contents.len());
        let mut replaced = 0_usize;
        for (index, line) in contents.split_inclusive('\n').enumerate() {
            let unterminated = line.strip_suffix('\n').unwrap_or(line);
            let row = unterminated.strip_suffix('\r').unwrap_or(unterminated);
            let terminator = line.strip_prefix(row).unwrap_or_default();
            let replacement = if index == 0 || row.trim().is_empty() {
                None
            } else {
                replace(row)
            };
            if let Some(new_row) = replacement {
                rewritten.push_str(&new_row);
                rewritten.push_str(terminator);
                replaced += 1;
            } else {
                rewritten.push_str(line);
            }
        }
        if replaced == 0 {
            return Ok(0);
        }

        let temporary = format!(".{}.tmp", self.file_name);
        self.dir
            .write(&temporary, rewritten.as_bytes())
            .map_err(|err| StorageError::write(&temporary, err))?;
        self.dir
            .rename(&temporary, &self.dir, &self.file_name)
            .map_err(|err| StorageError::write(&self.file_name, err))?;
        tracing::debug!(file = %self.file_name, rows = replaced, "rewrote record file");
        Ok(replaced)
    }
}

/// Splits a row into exactly `N` comma-separated fields.
///
/// Returns `None` when the row has a different number of fields.
#[must_use]
pub fn split_fields<const N: usize>(row: &str) -> Option<[&str; N]> {
    let fields: Vec<&str> = row.split(',').collect();
    fields.try_into().ok()
}
