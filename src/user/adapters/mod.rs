//! Adapter implementations for user lookup.

pub mod flat_file;
pub mod memory;
