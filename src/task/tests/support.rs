//! Shared fixtures for task lifecycle unit tests.

use crate::user::domain::{User, UserCode};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub(super) fn new() -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 5, 17, 12, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(super) fn alice() -> User {
    User::new(UserCode::new(1), "Alice", "alice@example.com", "alice-pw")
}

pub(super) fn bob() -> User {
    User::new(UserCode::new(2), "Bob", "bob@example.com", "bob-pw")
}
