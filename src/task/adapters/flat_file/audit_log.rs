//! Audit log appending to the logs record file.

use crate::storage::RecordFile;
use crate::task::{
    domain::AuditEntry,
    ports::{AuditLog, AuditLogError, AuditLogResult},
};

/// Header row of the logs file.
pub const LOGS_HEADER: &str = "Task_Code,Change_User_Code,Status,Change_Date";

/// Append-only audit log over a flat record file.
#[derive(Debug, Clone)]
pub struct FlatFileAuditLog {
    file: RecordFile,
}

impl FlatFileAuditLog {
    /// Creates an audit log appending to `file`.
    #[must_use]
    pub const fn new(file: RecordFile) -> Self {
        Self { file }
    }
}

impl AuditLog for FlatFileAuditLog {
    fn append(&self, entry: &AuditEntry) -> AuditLogResult<()> {
        let row = format!(
            "{},{},{},{}",
            entry.task_code(),
            entry.actor_code(),
            entry.status().code(),
            entry.change_date().format("%Y-%m-%d")
        );
        self.file
            .append_row(&row)
            .map_err(AuditLogError::persistence)
    }
}
