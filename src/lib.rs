//! Tasktrack: a task tracker over flat record files.
//!
//! Users log in with an email and password, create tasks assigned to a
//! responsible user, and advance each task through a fixed lifecycle
//! (`NotStarted -> InProgress -> Done`). Tasks, users, and the change history
//! are kept in comma-separated files with one header row each.
//!
//! # Architecture
//!
//! Tasktrack follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Flat-file and in-memory implementations of ports
//!
//! Storage is single-process and single-writer; no file locking is done.
//!
//! # Modules
//!
//! - [`user`]: User lookup and authentication
//! - [`task`]: Task lifecycle, change history, and listing
//! - [`storage`]: Flat-file record access shared by the adapters
//! - [`config`]: Storage configuration
//! - [`app`]: Wiring of the flat-file stores into the services

pub mod app;
pub mod config;
pub mod storage;
pub mod task;
pub mod user;
