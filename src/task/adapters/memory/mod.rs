//! In-memory adapter implementations for testing.
//!
//! These adapters keep records in insertion order and mirror the flat-file
//! semantics (append on save, last match wins on lookup) without touching
//! the filesystem.

mod audit_log;
mod task;

pub use audit_log::InMemoryAuditLog;
pub use task::InMemoryTaskRepository;
