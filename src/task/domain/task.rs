//! Task aggregate root and its assignee reference.

use super::{TaskCode, TaskDomainError, TaskName, TaskStatus};
use crate::user::domain::{User, UserCode};

/// The user responsible for a task.
///
/// Tasks read back from storage may reference a user code that no longer
/// resolves; such rows are kept with an explicit [`Assignee::Unresolved`]
/// marker instead of being dropped or failing the whole read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignee {
    /// The assignee code resolved to a user record.
    Resolved(User),
    /// No user record exists for the stored assignee code.
    Unresolved(UserCode),
}

impl Assignee {
    /// Returns the assignee's user code.
    #[must_use]
    pub const fn code(&self) -> UserCode {
        match self {
            Self::Resolved(user) => user.code(),
            Self::Unresolved(code) => *code,
        }
    }

    /// Returns the resolved user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Resolved(user) => Some(user),
            Self::Unresolved(_) => None,
        }
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    code: TaskCode,
    name: TaskName,
    status: TaskStatus,
    assignee: Assignee,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task code.
    pub code: TaskCode,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Assignee resolved at read time.
    pub assignee: Assignee,
}

impl Task {
    /// Creates a new task in [`TaskStatus::NotStarted`].
    ///
    /// The assignee must be a resolved user; a new task never carries a
    /// dangling assignee.
    #[must_use]
    pub const fn new(code: TaskCode, name: TaskName, assignee: User) -> Self {
        Self {
            code,
            name,
            status: TaskStatus::NotStarted,
            assignee: Assignee::Resolved(assignee),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            code: data.code,
            name: data.name,
            status: data.status,
            assignee: data.assignee,
        }
    }

    /// Returns the task code.
    #[must_use]
    pub const fn code(&self) -> TaskCode {
        self.code
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the assignee.
    #[must_use]
    pub const fn assignee(&self) -> &Assignee {
        &self.assignee
    }

    /// Advances the task to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless `target`
    /// is exactly one step after the current status. The task is left
    /// unchanged on error.
    pub fn transition_to(&mut self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(TaskDomainError::InvalidStateTransition {
                code: self.code,
                from: self.status,
                to: target,
            });
        }
        self.status = target;
        Ok(())
    }
}
