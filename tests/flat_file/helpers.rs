//! Shared fixtures for flat-file store integration tests.

use std::sync::Arc;

use camino::Utf8PathBuf;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use tasktrack::config::StorageConfig;
use tasktrack::storage::DataDirectory;
use tasktrack::task::adapters::flat_file::{
    FlatFileAuditLog, FlatFileTaskRepository, LOGS_HEADER, TASKS_HEADER,
};
use tasktrack::user::adapters::flat_file::{FlatFileUserRepository, USERS_HEADER};
use tasktrack::user::domain::{User, UserCode};
use tempfile::TempDir;

/// Users seeded into every data directory.
pub const USERS: &str = "Code,Name,Email,Password\n\
                         1,Alice,alice@example.com,alice-pw\n\
                         2,Bob,bob@example.com,bob-pw\n";

/// Clock pinned to midday on 2024-05-17 UTC.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock;

impl FixedClock {
    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0)
            .single()
            .expect("valid fixed timestamp")
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        Self::instant().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        Self::instant()
    }
}

/// Temporary data directory with a seeded users file.
pub struct DataDir {
    _temp: TempDir,
    /// Directory path.
    pub path: Utf8PathBuf,
    data: DataDirectory,
}

impl DataDir {
    /// Overwrites `file` with `contents`.
    pub fn write(&self, file: &str, contents: &str) {
        std::fs::write(self.path.join(file), contents).expect("write record file");
    }

    /// Reads `file` back as a string.
    pub fn read(&self, file: &str) -> String {
        std::fs::read_to_string(self.path.join(file)).expect("read record file")
    }

    /// Returns `true` when `file` exists.
    pub fn exists(&self, file: &str) -> bool {
        self.path.join(file).exists()
    }

    /// User repository over `users.csv`.
    pub fn users(&self) -> Arc<FlatFileUserRepository> {
        Arc::new(FlatFileUserRepository::new(
            self.data.record_file("users.csv", USERS_HEADER),
        ))
    }

    /// Task repository over `tasks.csv`.
    pub fn tasks(&self) -> FlatFileTaskRepository<FlatFileUserRepository> {
        FlatFileTaskRepository::new(
            self.data.record_file("tasks.csv", TASKS_HEADER),
            self.users(),
        )
    }

    /// Audit log over `logs.csv`.
    pub fn audit_log(&self) -> FlatFileAuditLog {
        FlatFileAuditLog::new(self.data.record_file("logs.csv", LOGS_HEADER))
    }

    /// Default configuration pointing at this directory.
    pub fn config(&self) -> StorageConfig {
        StorageConfig::default().with_data_dir(self.path.clone())
    }
}

/// Provides a fresh data directory seeded with [`USERS`].
#[fixture]
pub fn data_dir() -> DataDir {
    let temp = TempDir::new().expect("temporary directory");
    let path = Utf8PathBuf::from_path_buf(temp.path().to_path_buf())
        .expect("temporary path should be UTF-8");
    let data = DataDirectory::open(&path).expect("open data directory");
    let dir = DataDir {
        _temp: temp,
        path,
        data,
    };
    dir.write("users.csv", USERS);
    dir
}

/// The user with code 1.
pub fn alice() -> User {
    User::new(UserCode::new(1), "Alice", "alice@example.com", "alice-pw")
}

/// The user with code 2.
pub fn bob() -> User {
    User::new(UserCode::new(2), "Bob", "bob@example.com", "bob-pw")
}
