//! Unit tests for the task lifecycle.

mod support;
