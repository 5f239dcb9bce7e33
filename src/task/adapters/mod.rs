//! Adapter implementations for task persistence and change history.

pub mod flat_file;
pub mod memory;
