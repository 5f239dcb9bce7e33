//! Integration tests for the flat-file user repository.

use super::helpers::{DataDir, alice, bob, data_dir};
use rstest::rstest;
use tasktrack::user::{
    domain::{Credentials, UserCode},
    ports::{UserRepository, UserRepositoryError},
};

#[rstest]
fn finds_users_by_code(data_dir: DataDir) -> eyre::Result<()> {
    let users = data_dir.users();

    eyre::ensure!(users.find_by_code(UserCode::new(2))? == Some(bob()));
    eyre::ensure!(users.find_by_code(UserCode::new(3))?.is_none());
    Ok(())
}

#[rstest]
#[case("alice@example.com", "alice-pw", true)]
#[case("alice@example.com", "bob-pw", false)]
#[case("Alice@example.com", "alice-pw", false)]
#[case("alice@example.com ", "alice-pw", false)]
fn credentials_must_match_exactly(
    data_dir: DataDir,
    #[case] email: &str,
    #[case] password: &str,
    #[case] found: bool,
) -> eyre::Result<()> {
    let user = data_dir
        .users()
        .find_by_credentials(&Credentials::new(email, password))?;

    eyre::ensure!(user.is_some() == found, "lookup for {email:?} returned {user:?}");
    if found {
        eyre::ensure!(user == Some(alice()));
    }
    Ok(())
}

#[rstest]
fn last_row_wins_for_duplicate_codes(data_dir: DataDir) -> eyre::Result<()> {
    data_dir.write(
        "users.csv",
        "Code,Name,Email,Password\n\
         1,Alice,alice@example.com,alice-pw\n\
         1,Alicia,alicia@example.com,alicia-pw\n",
    );

    let user = data_dir.users().find_by_code(UserCode::new(1))?;

    eyre::ensure!(user.as_ref().map(|found| found.name()) == Some("Alicia"));
    Ok(())
}

#[rstest]
fn malformed_rows_are_skipped(data_dir: DataDir) -> eyre::Result<()> {
    data_dir.write(
        "users.csv",
        "Code,Name,Email,Password\n\
         x,Broken,broken@example.com,pw\n\
         3,Short,short@example.com\n\
         2,Bob,bob@example.com,bob-pw\n",
    );
    let users = data_dir.users();

    eyre::ensure!(users.find_by_code(UserCode::new(2))? == Some(bob()));
    eyre::ensure!(users.find_by_code(UserCode::new(3))?.is_none());
    eyre::ensure!(
        users
            .find_by_credentials(&Credentials::new("broken@example.com", "pw"))?
            .is_none()
    );
    Ok(())
}

#[rstest]
fn missing_users_file_is_a_persistence_error(data_dir: DataDir) {
    std::fs::remove_file(data_dir.path.join("users.csv")).expect("remove users file");

    let result = data_dir.users().find_by_code(UserCode::new(1));

    assert!(matches!(result, Err(UserRepositoryError::Persistence(_))));
}
