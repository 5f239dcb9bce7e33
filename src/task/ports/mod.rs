//! Port contracts for task lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod audit_log;
pub mod repository;

pub use audit_log::{AuditLog, AuditLogError, AuditLogResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};

#[cfg(test)]
pub use audit_log::MockAuditLog;
#[cfg(test)]
pub use repository::MockTaskRepository;
