//! Repository port for task persistence and lookup.

use crate::task::domain::{Task, TaskCode};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Implementations do not enforce code uniqueness: duplicate codes can be
/// stored, and lookups resolve the ambiguity by returning the last match.
#[cfg_attr(test, mockall::automock)]
pub trait TaskRepository: Send + Sync {
    /// Returns every readable task in storage order.
    ///
    /// Malformed records are skipped rather than failing the whole read.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn find_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds the last task stored with `code`.
    ///
    /// Returns `None` when no task has the code.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>>;

    /// Returns `true` when any stored record carries `code`.
    ///
    /// Unlike [`Self::find_by_code`], records that cannot be read back as a
    /// task still count, so a code is never handed out twice.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn code_in_use(&self, code: TaskCode) -> TaskRepositoryResult<bool>;

    /// Appends a new task without checking for an existing code.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage cannot be
    /// written.
    fn save(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Replaces every stored record carrying the task's code with its new
    /// values, leaving all other records untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when no record has the code,
    /// or [`TaskRepositoryError::Persistence`] when storage cannot be read or
    /// written.
    fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskCode),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
