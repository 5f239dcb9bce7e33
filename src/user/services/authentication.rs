//! Login by email and password.

use crate::user::{
    domain::{Credentials, User},
    ports::{UserRepository, UserRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors returned by [`AuthenticationService::login`].
#[derive(Debug, Error)]
pub enum LoginError {
    /// No user record matches the presented credentials.
    #[error("no user matches that email and password")]
    InvalidCredentials,
    /// The users file could not be read.
    #[error("user storage is unavailable")]
    Storage(#[source] UserRepositoryError),
}

/// Resolves the acting user for a session.
///
/// The returned [`User`] is the actor passed explicitly into every task
/// operation; nothing is remembered between calls.
#[derive(Clone)]
pub struct AuthenticationService<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> AuthenticationService<U>
where
    U: UserRepository,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Authenticates a user by exact email and password match.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::InvalidCredentials`] when no user matches, or
    /// [`LoginError::Storage`] when the users file cannot be read.
    pub fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<User, LoginError> {
        let credentials = Credentials::new(email, password);
        match self.users.find_by_credentials(&credentials) {
            Ok(Some(user)) => {
                tracing::info!(user = %user.code(), "user logged in");
                Ok(user)
            }
            Ok(None) => {
                tracing::debug!(email = credentials.email(), "login rejected");
                Err(LoginError::InvalidCredentials)
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to read users during login");
                Err(LoginError::Storage(err))
            }
        }
    }
}
