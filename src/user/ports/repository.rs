//! Repository port for read-only user lookup.

use crate::user::domain::{Credentials, User, UserCode};
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// Read-only user lookup contract.
///
/// Absence is a normal outcome and is reported as `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Finds the user with the given code.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>>;

    /// Finds the user whose email and password both match exactly.
    ///
    /// The pair is not guaranteed unique; when several records match, the
    /// last one scanned wins.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::Persistence`] when storage cannot be
    /// read.
    fn find_by_credentials(&self, credentials: &Credentials)
    -> UserRepositoryResult<Option<User>>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
