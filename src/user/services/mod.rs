//! Application services for users.

mod authentication;

pub use authentication::{AuthenticationService, LoginError};
