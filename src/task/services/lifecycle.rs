//! Service layer for task creation, status changes, and listing.

use crate::task::{
    domain::{AuditEntry, Task, TaskCode, TaskDomainError, TaskName, TaskStatus},
    ports::{AuditLog, AuditLogError, TaskRepository, TaskRepositoryError},
};
use crate::user::{
    domain::{User, UserCode},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use super::listing::TaskView;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    code: TaskCode,
    name: String,
    assignee: UserCode,
}

impl CreateTaskRequest {
    /// Creates a request for a new task assigned to `assignee`.
    #[must_use]
    pub fn new(code: TaskCode, name: impl Into<String>, assignee: UserCode) -> Self {
        Self {
            code,
            name: name.into(),
            assignee,
        }
    }
}

/// Request payload for advancing a task's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeStatusRequest {
    code: TaskCode,
    status: TaskStatus,
}

impl ChangeStatusRequest {
    /// Creates a request moving task `code` to `status`.
    #[must_use]
    pub const fn new(code: TaskCode, status: TaskStatus) -> Self {
        Self { code, status }
    }
}

/// Coarse classification of [`TaskLifecycleError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced task or user does not exist. The caller may re-prompt.
    NotFound,
    /// The input was rejected. The message can be shown verbatim.
    Validation,
    /// Storage failed. The operation was aborted without repair or retry.
    Storage,
}

/// Service-level errors for task lifecycle operations.
///
/// Storage variants display a generic message; the underlying cause is
/// available through [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// No task has the requested code.
    #[error("no task exists with code {0}")]
    TaskNotFound(TaskCode),

    /// The requested assignee does not exist.
    #[error("no user exists with code {0}")]
    AssigneeNotFound(UserCode),

    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The users file could not be read.
    #[error("user storage is unavailable")]
    UserStorage(#[source] UserRepositoryError),

    /// The tasks file could not be read or written.
    #[error("task storage is unavailable")]
    TaskStorage(#[source] TaskRepositoryError),

    /// The change history could not be written.
    #[error("task history storage is unavailable")]
    AuditLog(#[source] AuditLogError),
}

impl TaskLifecycleError {
    /// Returns the error's classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound(_) | Self::AssigneeNotFound(_) => ErrorKind::NotFound,
            Self::Domain(_) => ErrorKind::Validation,
            Self::UserStorage(_) | Self::TaskStorage(_) | Self::AuditLog(_) => ErrorKind::Storage,
        }
    }
}

impl From<UserRepositoryError> for TaskLifecycleError {
    fn from(err: UserRepositoryError) -> Self {
        reported(Self::UserStorage(err))
    }
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(code) => Self::TaskNotFound(code),
            TaskRepositoryError::Persistence(_) => reported(Self::TaskStorage(err)),
        }
    }
}

impl From<AuditLogError> for TaskLifecycleError {
    fn from(err: AuditLogError) -> Self {
        reported(Self::AuditLog(err))
    }
}

/// Logs a storage failure with full detail before it is surfaced.
fn reported(error: TaskLifecycleError) -> TaskLifecycleError {
    tracing::error!(error = %error, detail = ?error, "task storage operation failed");
    error
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Validates input, enforces the status state machine, and coordinates
/// writes to the task repository and the audit log. Every operation takes
/// the acting user explicitly.
///
/// Writes are not transactional across stores: if a task is saved but its
/// audit entry cannot be appended, the task stays saved.
#[derive(Clone)]
pub struct TaskLifecycleService<U, T, L, C>
where
    U: UserRepository,
    T: TaskRepository,
    L: AuditLog,
    C: Clock + Send + Sync,
{
    users: Arc<U>,
    tasks: Arc<T>,
    audit_log: Arc<L>,
    clock: Arc<C>,
}

impl<U, T, L, C> TaskLifecycleService<U, T, L, C>
where
    U: UserRepository,
    T: TaskRepository,
    L: AuditLog,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(users: Arc<U>, tasks: Arc<T>, audit_log: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            users,
            tasks,
            audit_log,
            clock,
        }
    }

    /// Creates a task in [`TaskStatus::NotStarted`] and records it in the
    /// audit log.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the name is invalid or the
    /// code is already in use, [`TaskLifecycleError::AssigneeNotFound`] when
    /// the assignee does not exist, or a storage variant when persistence
    /// fails. Nothing is written unless validation passes.
    pub fn create_task(
        &self,
        request: CreateTaskRequest,
        actor: &User,
    ) -> TaskLifecycleResult<Task> {
        let name = TaskName::new(request.name)?;
        let assignee = self
            .users
            .find_by_code(request.assignee)?
            .ok_or(TaskLifecycleError::AssigneeNotFound(request.assignee))?;
        if self.tasks.code_in_use(request.code)? {
            return Err(TaskDomainError::DuplicateTaskCode(request.code).into());
        }

        let task = Task::new(request.code, name, assignee);
        self.tasks.save(&task)?;
        self.audit_log.append(&AuditEntry::record(
            task.code(),
            actor,
            task.status(),
            &*self.clock,
        ))?;

        tracing::info!(
            task = %task.code(),
            assignee = %task.assignee().code(),
            actor = %actor.code(),
            "task created"
        );
        Ok(task)
    }

    /// Advances a task exactly one step along its lifecycle and records the
    /// change in the audit log.
    ///
    /// The task keeps its assignee; the actor is only recorded as the user
    /// who made the change.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when no task has the
    /// code, [`TaskLifecycleError::Domain`] with
    /// [`TaskDomainError::InvalidStateTransition`] for any move other than
    /// one step forward, or a storage variant when persistence fails.
    pub fn change_status(
        &self,
        request: ChangeStatusRequest,
        actor: &User,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self
            .tasks
            .find_by_code(request.code)?
            .ok_or(TaskLifecycleError::TaskNotFound(request.code))?;
        let previous = task.status();
        task.transition_to(request.status)?;

        self.tasks.update(&task)?;
        self.audit_log.append(&AuditEntry::record(
            task.code(),
            actor,
            task.status(),
            &*self.clock,
        ))?;

        tracing::info!(
            task = %task.code(),
            from = previous.as_str(),
            to = task.status().as_str(),
            actor = %actor.code(),
            "task status changed"
        );
        Ok(task)
    }

    /// Projects every stored task for display to `actor`.
    ///
    /// # Errors
    ///
    /// Returns a storage variant when the tasks or users cannot be read.
    pub fn list_tasks(&self, actor: &User) -> TaskLifecycleResult<Vec<TaskView>> {
        let tasks = self.tasks.find_all()?;
        Ok(tasks
            .iter()
            .map(|task| TaskView::project(task, actor))
            .collect())
    }
}
