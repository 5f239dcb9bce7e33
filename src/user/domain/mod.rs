//! Domain model for users and their credentials.

mod ids;
mod user;

pub use ids::UserCode;
pub use user::{Credentials, User};
