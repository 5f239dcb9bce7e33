//! Append-only port for task change history.

use crate::task::domain::AuditEntry;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit log operations.
pub type AuditLogResult<T> = Result<T, AuditLogError>;

/// Change-history sink.
///
/// Entries are only ever appended; the log is never read back or rewritten
/// by the task services.
#[cfg_attr(test, mockall::automock)]
pub trait AuditLog: Send + Sync {
    /// Appends one entry to the end of the log.
    ///
    /// # Errors
    ///
    /// Returns [`AuditLogError::Persistence`] when storage cannot be written.
    fn append(&self, entry: &AuditEntry) -> AuditLogResult<()>;
}

/// Errors returned by audit log implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditLogError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditLogError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
