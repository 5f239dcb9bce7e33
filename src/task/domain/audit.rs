//! Append-only change-history records.

use super::{TaskCode, TaskStatus};
use crate::user::domain::{User, UserCode};
use chrono::NaiveDate;
use mockable::Clock;

/// One change-history record: who moved which task to which status, and
/// on which calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditEntry {
    task_code: TaskCode,
    actor_code: UserCode,
    status: TaskStatus,
    change_date: NaiveDate,
}

impl AuditEntry {
    /// Creates an entry with explicit values.
    #[must_use]
    pub const fn new(
        task_code: TaskCode,
        actor_code: UserCode,
        status: TaskStatus,
        change_date: NaiveDate,
    ) -> Self {
        Self {
            task_code,
            actor_code,
            status,
            change_date,
        }
    }

    /// Records a change made by `actor` today, according to `clock`.
    #[must_use]
    pub fn record(
        task_code: TaskCode,
        actor: &User,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Self {
        Self::new(task_code, actor.code(), status, today(clock))
    }

    /// Returns the changed task's code.
    #[must_use]
    pub const fn task_code(&self) -> TaskCode {
        self.task_code
    }

    /// Returns the code of the user who made the change.
    #[must_use]
    pub const fn actor_code(&self) -> UserCode {
        self.actor_code
    }

    /// Returns the status the task ended up in.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the calendar day of the change.
    #[must_use]
    pub const fn change_date(&self) -> NaiveDate {
        self.change_date
    }
}

/// Returns the local calendar date according to `clock`.
#[must_use]
pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.local().date_naive()
}
