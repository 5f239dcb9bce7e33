//! Flat-file adapters for tasks and their change history.
//!
//! Both files are comma-separated with one header row. The tasks file stores
//! the assignee as a user code, resolved through a [`UserRepository`] when
//! tasks are read.
//!
//! [`UserRepository`]: crate::user::ports::UserRepository

mod audit_log;
mod task;

pub use audit_log::{FlatFileAuditLog, LOGS_HEADER};
pub use task::{FlatFileTaskRepository, TASKS_HEADER};
