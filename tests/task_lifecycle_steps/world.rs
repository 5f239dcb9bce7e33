//! Shared world state for task lifecycle BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::task::{
    adapters::memory::{InMemoryAuditLog, InMemoryTaskRepository},
    domain::{Task, TaskStatus},
    services::{TaskLifecycleError, TaskLifecycleService},
};
use tasktrack::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{User, UserCode},
    services::{AuthenticationService, LoginError},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryUserRepository,
    InMemoryTaskRepository,
    InMemoryAuditLog,
    DefaultClock,
>;

/// Scenario world for task lifecycle behaviour tests.
pub struct TaskLifecycleWorld {
    pub authentication: AuthenticationService<InMemoryUserRepository>,
    pub service: TestTaskService,
    pub audit_log: Arc<InMemoryAuditLog>,
    pub actor: Option<User>,
    pub last_result: Option<Result<Task, TaskLifecycleError>>,
    pub last_login: Option<Result<User, LoginError>>,
}

impl TaskLifecycleWorld {
    /// Creates a world with two registered users and no tasks.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::with_users([
            User::new(UserCode::new(1), "Alice", "alice@example.com", "alice-pw"),
            User::new(UserCode::new(2), "Bob", "bob@example.com", "bob-pw"),
        ]));
        let audit_log = Arc::new(InMemoryAuditLog::new());
        let service = TaskLifecycleService::new(
            Arc::clone(&users),
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&audit_log),
            Arc::new(DefaultClock),
        );

        Self {
            authentication: AuthenticationService::new(users),
            service,
            audit_log,
            actor: None,
            last_result: None,
            last_login: None,
        }
    }

    /// Returns the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns an error when no login step has run.
    pub fn actor(&self) -> Result<&User, eyre::Report> {
        self.actor
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no user is logged in in scenario world"))
    }
}

impl Default for TaskLifecycleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskLifecycleWorld {
    TaskLifecycleWorld::default()
}

/// Parses a status named in a feature file.
///
/// # Errors
///
/// Returns an error when the text is not a known status.
pub fn parse_status(status: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(status).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}
