//! Wiring of the flat-file stores into the application services.

use std::sync::Arc;

use mockable::Clock;

use crate::config::StorageConfig;
use crate::storage::{DataDirectory, StorageError};
use crate::task::{
    adapters::flat_file::{FlatFileAuditLog, FlatFileTaskRepository, LOGS_HEADER, TASKS_HEADER},
    services::TaskLifecycleService,
};
use crate::user::{
    adapters::flat_file::{FlatFileUserRepository, USERS_HEADER},
    services::AuthenticationService,
};

/// Task lifecycle service backed by the flat record files.
pub type FlatFileTaskService<C> = TaskLifecycleService<
    FlatFileUserRepository,
    FlatFileTaskRepository<FlatFileUserRepository>,
    FlatFileAuditLog,
    C,
>;

/// Services over one data directory.
pub struct FlatFileApp<C>
where
    C: Clock + Send + Sync,
{
    /// Resolves the acting user from credentials.
    pub authentication: AuthenticationService<FlatFileUserRepository>,
    /// Creates, advances, and lists tasks.
    pub tasks: FlatFileTaskService<C>,
}

impl<C> FlatFileApp<C>
where
    C: Clock + Send + Sync,
{
    /// Opens the data directory named by `config`.
    ///
    /// The tasks and logs files are created with their header rows when
    /// missing. The users file is only read, so a missing users file surfaces
    /// as a storage error on first lookup.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the directory cannot be opened or a
    /// missing file cannot be created.
    pub fn open(config: &StorageConfig, clock: C) -> Result<Self, StorageError> {
        let data = DataDirectory::open(&config.data_dir)?;
        let users_file = data.record_file(&config.users_file, USERS_HEADER);
        let tasks_file = data.record_file(&config.tasks_file, TASKS_HEADER);
        let logs_file = data.record_file(&config.logs_file, LOGS_HEADER);
        tasks_file.ensure_exists()?;
        logs_file.ensure_exists()?;

        let users = Arc::new(FlatFileUserRepository::new(users_file));
        let tasks = Arc::new(FlatFileTaskRepository::new(tasks_file, Arc::clone(&users)));
        let audit_log = Arc::new(FlatFileAuditLog::new(logs_file));

        Ok(Self {
            authentication: AuthenticationService::new(Arc::clone(&users)),
            tasks: TaskLifecycleService::new(users, tasks, audit_log, Arc::new(clock)),
        })
    }
}
