//! Error types for task domain validation and parsing.

use super::{TaskCode, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task name is longer than allowed.
    #[error("task name must be at most {max} characters, got {actual}")]
    TaskNameTooLong {
        /// Maximum accepted length.
        max: usize,
        /// Length of the rejected name.
        actual: usize,
    },

    /// The task name contains a character the record format cannot hold.
    #[error("task name must not contain {0:?}")]
    InvalidTaskNameCharacter(char),

    /// A task with the code already exists.
    #[error("task code {0} is already in use")]
    DuplicateTaskCode(TaskCode),

    /// The requested status is not exactly one step after the current one.
    #[error(
        "task {code} is {from} and can only advance one step at a time, so it cannot move to {to}"
    )]
    InvalidStateTransition {
        /// Task being changed.
        code: TaskCode,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },
}

/// Error returned while parsing a task status from input or storage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
