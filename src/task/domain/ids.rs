//! Identifier and validated scalar types for the task domain.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Numeric task identifier as stored in the tasks file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskCode(u32);

impl TaskCode {
    /// Wraps a raw task code.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl FromStr for TaskCode {
    type Err = ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.trim().parse().map(Self)
    }
}

impl fmt::Display for TaskCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated task name.
///
/// Names are stored unquoted in a comma-separated file, so commas and line
/// breaks are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    /// Longest accepted name, in characters.
    pub const MAX_CHARS: usize = 10;

    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the trimmed value is
    /// empty, [`TaskDomainError::TaskNameTooLong`] when it exceeds
    /// [`Self::MAX_CHARS`], or [`TaskDomainError::InvalidTaskNameCharacter`]
    /// when it contains a comma or line break.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        let length = normalized.chars().count();
        if length > Self::MAX_CHARS {
            return Err(TaskDomainError::TaskNameTooLong {
                max: Self::MAX_CHARS,
                actual: length,
            });
        }
        if let Some(found) = normalized
            .chars()
            .find(|ch| matches!(ch, ',' | '\n' | '\r'))
        {
            return Err(TaskDomainError::InvalidTaskNameCharacter(found));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Wraps a name read back from storage without re-validating it.
    pub(crate) fn from_persisted(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
