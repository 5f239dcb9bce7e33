//! User repository backed by the users record file.

use crate::storage::{RecordFile, split_fields};
use crate::user::{
    domain::{Credentials, User, UserCode},
    ports::{UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Header row of the users file.
pub const USERS_HEADER: &str = "Code,Name,Email,Password";

/// Read-only user repository scanning a flat record file.
#[derive(Debug, Clone)]
pub struct FlatFileUserRepository {
    file: RecordFile,
}

impl FlatFileUserRepository {
    /// Creates a repository reading `file`.
    #[must_use]
    pub const fn new(file: RecordFile) -> Self {
        Self { file }
    }

    fn load(&self) -> UserRepositoryResult<Vec<User>> {
        let rows = self
            .file
            .read_rows()
            .map_err(UserRepositoryError::persistence)?;
        Ok(rows
            .iter()
            .filter_map(|row| parse_row(self.file.file_name(), row))
            .collect())
    }
}

fn parse_row(file: &str, row: &str) -> Option<User> {
    let Some([raw_code, name, email, password]) = split_fields::<4>(row) else {
        tracing::warn!(file, row, "skipping user row with wrong field count");
        return None;
    };
    let Ok(code) = raw_code.parse::<UserCode>() else {
        tracing::warn!(file, row, "skipping user row with non-numeric code");
        return None;
    };
    Some(User::new(code, name, email, password))
}

impl UserRepository for FlatFileUserRepository {
    fn find_by_code(&self, code: UserCode) -> UserRepositoryResult<Option<User>> {
        Ok(self
            .load()?
            .into_iter()
            .rfind(|user| user.code() == code))
    }

    fn find_by_credentials(
        &self,
        credentials: &Credentials,
    ) -> UserRepositoryResult<Option<User>> {
        Ok(self
            .load()?
            .into_iter()
            .rfind(|user| user.matches(credentials)))
    }
}
