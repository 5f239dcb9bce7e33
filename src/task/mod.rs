//! Task lifecycle management.
//!
//! Tasks are created in `NotStarted`, assigned to an existing user, and
//! advanced one step at a time through `InProgress` to `Done`. Every
//! creation and status change appends an entry to the change history. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
