//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, parse_status};
use rstest_bdd_macros::when;
use tasktrack::task::{
    domain::TaskCode,
    services::{ChangeStatusRequest, CreateTaskRequest},
};
use tasktrack::user::domain::UserCode;

#[when(r#"they create task {code:u32} named "{name}" for user {assignee:u32}"#)]
fn create_task(
    world: &mut TaskLifecycleWorld,
    code: u32,
    name: String,
    assignee: u32,
) -> Result<(), eyre::Report> {
    let actor = world.actor()?.clone();
    let result = world.service.create_task(
        CreateTaskRequest::new(TaskCode::new(code), name, UserCode::new(assignee)),
        &actor,
    );
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"they move task {code:u32} to "{status}""#)]
fn move_task(
    world: &mut TaskLifecycleWorld,
    code: u32,
    status: String,
) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let actor = world.actor()?.clone();
    let result = world
        .service
        .change_status(ChangeStatusRequest::new(TaskCode::new(code), target), &actor);
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"someone logs in as "{email}" with password "{password}""#)]
fn someone_logs_in(world: &mut TaskLifecycleWorld, email: String, password: String) {
    world.last_login = Some(world.authentication.login(email, password));
}
