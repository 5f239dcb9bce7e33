//! User lookup and authentication.
//!
//! Users are read-only records: they are loaded from storage, resolved by
//! code or by credential pair, and never written back.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Authentication in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
