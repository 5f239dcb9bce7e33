//! In-memory user repository for tests.

use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{Credentials, User, UserCode},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `users` in scan order.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users.into_iter().collect())),
        }
    }

    fn scan(&self, predicate: impl Fn(&User) -> bool) -> UserRepositoryResult<Option<User>> {
        let users = self.users.read().map_err(|err| {
            UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(users.iter().rfind(|user| predicate(user)).cloned())
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>> {
        self.scan(|user| user.code() == code)
    }

    fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> UserRepositoryResult<Option<User>> {
        self.scan(|user| user.matches(credentials))
    }
}
