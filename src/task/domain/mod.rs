//! Domain model for the task lifecycle.
//!
//! Tasks move through a strictly linear status lifecycle and every creation
//! or status change is recorded as an [`AuditEntry`]. Storage concerns stay
//! outside of the domain boundary.

mod audit;
mod error;
mod ids;
mod status;
mod task;

pub use audit::{AuditEntry, today};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::{TaskCode, TaskName};
pub use status::TaskStatus;
pub use task::{Assignee, PersistedTaskData, Task};
