//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_status};
use rstest_bdd_macros::then;
use tasktrack::task::{domain::TaskCode, services::TaskView};
use tasktrack::user::services::LoginError;

fn find_view(world: &TaskLifecycleWorld, code: u32) -> Result<Option<TaskView>, eyre::Report> {
    let actor = world.actor()?;
    let views = world.service.list_tasks(actor)?;
    Ok(views
        .into_iter()
        .rfind(|view| view.code == TaskCode::new(code)))
}

#[then(r#"task {code:u32} has status "{status}""#)]
fn task_has_status(
    world: &TaskLifecycleWorld,
    code: u32,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = parse_status(&status)?;
    let view = find_view(world, code)?.ok_or_else(|| eyre::eyre!("task {code} is missing"))?;
    eyre::ensure!(
        view.status == expected,
        "expected status {}, found {}",
        expected.as_str(),
        view.status.as_str()
    );
    Ok(())
}

#[then(r#"task {code:u32} is shown with assignee "{label}""#)]
fn task_shown_with_assignee(
    world: &TaskLifecycleWorld,
    code: u32,
    label: String,
) -> Result<(), eyre::Report> {
    let view = find_view(world, code)?.ok_or_else(|| eyre::eyre!("task {code} is missing"))?;
    let shown = view.assignee.to_string();
    eyre::ensure!(shown == label, "expected assignee {label:?}, found {shown:?}");
    Ok(())
}

#[then("task {code:u32} does not exist")]
fn task_does_not_exist(world: &TaskLifecycleWorld, code: u32) -> Result<(), eyre::Report> {
    eyre::ensure!(
        find_view(world, code)?.is_none(),
        "task {code} should not exist"
    );
    Ok(())
}

#[then("the number of recorded changes for task {code:u32} is {count:usize}")]
fn recorded_changes(
    world: &TaskLifecycleWorld,
    code: u32,
    count: usize,
) -> Result<(), eyre::Report> {
    let recorded = world
        .audit_log
        .entries()
        .iter()
        .filter(|entry| entry.task_code() == TaskCode::new(code))
        .count();
    eyre::ensure!(
        recorded == count,
        "expected {count} recorded changes, found {recorded}"
    );
    Ok(())
}

#[then(r#"the request fails with "{message}""#)]
fn request_fails_with(world: &TaskLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result"))?;
    let Err(err) = result else {
        return Err(eyre::eyre!("expected the request to fail, got {result:?}"));
    };
    eyre::ensure!(
        err.to_string() == message,
        "expected error {message:?}, got {:?}",
        err.to_string()
    );
    Ok(())
}

#[then("the login is rejected")]
fn login_is_rejected(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_login
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing login result"))?;
    eyre::ensure!(
        matches!(result, Err(LoginError::InvalidCredentials)),
        "expected rejected credentials, got {result:?}"
    );
    Ok(())
}
